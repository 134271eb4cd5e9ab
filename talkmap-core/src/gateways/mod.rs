pub mod geocode;
