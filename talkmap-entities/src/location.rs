use crate::geo::*;

/// A distinct talk location that could be placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub name: String,
    pub pos: Coordinates,
    /// Number of talks given at this location (`>= 1`).
    pub count: usize,
}

impl ResolvedLocation {
    pub fn new(name: impl Into<String>, pos: Coordinates) -> Self {
        Self {
            name: name.into(),
            pos,
            count: 1,
        }
    }

    /// The text shown for the map marker.
    pub fn label(&self) -> String {
        if self.count > 1 {
            format!("{} ({} talks)", self.name, self.count)
        } else {
            self.name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_of_single_talk() {
        let loc = ResolvedLocation::new("Singapore", Coordinates::new_unchecked(1.3521, 103.8198));
        assert_eq!(loc.count, 1);
        assert_eq!(loc.label(), "Singapore");
    }

    #[test]
    fn label_with_talk_count() {
        let mut loc = ResolvedLocation::new(
            "Denver, Colorado",
            Coordinates::new_unchecked(39.7392, -104.9903),
        );
        loc.count = 3;
        assert_eq!(loc.label(), "Denver, Colorado (3 talks)");
    }
}
