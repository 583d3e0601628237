// Health facility domain model
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadLevel {
    Normal,
    Busy,
    Critical,
}

impl LoadLevel {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 90 => LoadLevel::Critical,
            p if p >= 70 => LoadLevel::Busy,
            _ => LoadLevel::Normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: u32,
    pub name: String,
    pub facility_type: String,
    pub location: String,
    pub capacity: u32,
    pub current_load: u32,
    pub staff: u32,
    pub active: bool,
}

impl Facility {
    /// Current load as a whole percentage of capacity, rounded half up.
    /// A facility with no capacity reports 0.
    pub fn load_percentage(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        let scaled = u64::from(self.current_load) * 200 + u64::from(self.capacity);
        u32::try_from(scaled / (u64::from(self.capacity) * 2)).unwrap_or(u32::MAX)
    }

    pub fn load_level(&self) -> LoadLevel {
        LoadLevel::from_percentage(self.load_percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility(capacity: u32, current_load: u32) -> Facility {
        Facility {
            id: 1,
            name: "Primary Health Center - Sector 12".to_string(),
            facility_type: "PHC".to_string(),
            location: "Sector 12, Chandigarh".to_string(),
            capacity,
            current_load,
            staff: 12,
            active: true,
        }
    }

    #[test]
    fn test_load_percentage_rounds() {
        assert_eq!(facility(150, 98).load_percentage(), 65);
        assert_eq!(facility(200, 145).load_percentage(), 73);
        assert_eq!(facility(80, 65).load_percentage(), 81);
        assert_eq!(facility(3, 2).load_percentage(), 67);
        assert_eq!(facility(0, 10).load_percentage(), 0);
    }

    #[test]
    fn test_load_percentage_saturates() {
        assert_eq!(facility(1, u32::MAX).load_percentage(), u32::MAX);
        assert_eq!(facility(1, u32::MAX).load_level(), LoadLevel::Critical);
        assert_eq!(facility(u32::MAX, u32::MAX).load_percentage(), 100);
    }

    #[test]
    fn test_load_levels() {
        assert_eq!(facility(100, 95).load_level(), LoadLevel::Critical);
        assert_eq!(facility(100, 90).load_level(), LoadLevel::Critical);
        assert_eq!(facility(100, 70).load_level(), LoadLevel::Busy);
        assert_eq!(facility(100, 69).load_level(), LoadLevel::Normal);
    }
}
