//! CSV-backed doctor roster lookup.
//!
//! A thin collaborator around the static roster file: case-insensitive
//! filtering by specialist and location, experience and rating floors,
//! sorted by rating then experience descending.

use std::cmp::Ordering;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::RosterError;

/// One roster entry. Field names mirror the CSV header:
/// `Name,Location,Specialist,Experience,Rating,Contact`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Doctor {
    pub name: String,
    pub location: String,
    pub specialist: String,
    /// Years of practice.
    pub experience: u32,
    /// Patient rating on a 0-5 scale.
    pub rating: f32,
    pub contact: String,
}

/// In-memory roster loaded once from the static CSV.
pub struct DoctorRoster {
    doctors: Vec<Doctor>,
}

impl DoctorRoster {
    /// Load the roster from a CSV file with the standard header.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let mut reader = csv::Reader::from_path(path)?;
        let doctors = reader
            .deserialize()
            .collect::<Result<Vec<Doctor>, _>>()?;

        info!(count = doctors.len(), path = %path.display(), "Doctor roster loaded");
        Ok(Self { doctors })
    }

    pub fn from_doctors(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    /// Find doctors matching a specialist, with optional location and
    /// rating filters and a minimum-experience floor.
    ///
    /// Results sort by rating then experience, both descending. When no
    /// rating floor is requested the sort falls back to experience only,
    /// leaving equally-experienced doctors in roster order.
    pub fn find(
        &self,
        specialist: &str,
        location: Option<&str>,
        min_experience: u32,
        min_rating: Option<f32>,
    ) -> Vec<Doctor> {
        let specialist = specialist.trim().to_lowercase();
        let location = location.map(|l| l.trim().to_lowercase());

        let mut matches: Vec<Doctor> = self
            .doctors
            .iter()
            .filter(|d| d.specialist.trim().to_lowercase() == specialist)
            .filter(|d| match &location {
                Some(loc) => d.location.trim().to_lowercase() == *loc,
                None => true,
            })
            .filter(|d| d.experience >= min_experience)
            .filter(|d| match min_rating {
                Some(floor) => d.rating >= floor,
                None => true,
            })
            .cloned()
            .collect();

        if min_rating.is_some() {
            matches.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(Ordering::Equal)
                    .then(b.experience.cmp(&a.experience))
            });
        } else {
            matches.sort_by(|a, b| b.experience.cmp(&a.experience));
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(name: &str, location: &str, specialist: &str, experience: u32, rating: f32) -> Doctor {
        Doctor {
            name: name.to_string(),
            location: location.to_string(),
            specialist: specialist.to_string(),
            experience,
            rating,
            contact: format!("+1-555-{experience:04}"),
        }
    }

    fn sample_roster() -> DoctorRoster {
        DoctorRoster::from_doctors(vec![
            doctor("Amara Osei", "Boston", "Cardiologist", 12, 4.8),
            doctor("Lena Fischer", "Boston", "Cardiologist", 7, 4.8),
            doctor("Ravi Shah", "Chicago", "Cardiologist", 15, 4.2),
            doctor("Mina Park", "Boston", "Pulmonologist", 9, 4.6),
            doctor("Tom Hale", "Boston", "Cardiologist", 1, 3.0),
        ])
    }

    #[test]
    fn filters_by_specialist_case_insensitively() {
        let roster = sample_roster();
        let result = roster.find("  cardiologist ", None, 0, None);
        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|d| d.specialist == "Cardiologist"));
    }

    #[test]
    fn location_filter_is_optional() {
        let roster = sample_roster();
        let boston = roster.find("Cardiologist", Some("boston"), 0, None);
        assert_eq!(boston.len(), 3);
        let anywhere = roster.find("Cardiologist", None, 0, None);
        assert_eq!(anywhere.len(), 4);
    }

    #[test]
    fn experience_floor_applies() {
        let roster = sample_roster();
        let result = roster.find("Cardiologist", None, 10, None);
        let names: Vec<&str> = result.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Ravi Shah", "Amara Osei"]);
    }

    #[test]
    fn rating_floor_sorts_by_rating_then_experience() {
        let roster = sample_roster();
        let result = roster.find("Cardiologist", None, 0, Some(4.0));
        let names: Vec<&str> = result.iter().map(|d| d.name.as_str()).collect();
        // 4.8/12 before 4.8/7 before 4.2/15.
        assert_eq!(names, vec!["Amara Osei", "Lena Fischer", "Ravi Shah"]);
    }

    #[test]
    fn without_rating_floor_sorts_by_experience_only() {
        let roster = sample_roster();
        let result = roster.find("Cardiologist", None, 0, None);
        let names: Vec<&str> = result.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Ravi Shah", "Amara Osei", "Lena Fischer", "Tom Hale"]);
    }

    #[test]
    fn unknown_specialist_yields_empty() {
        let roster = sample_roster();
        assert!(roster.find("Dermatologist", None, 0, None).is_empty());
    }

    #[test]
    fn loads_bundled_sample_csv() {
        let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join("doctor_profiles.csv");
        let roster = DoctorRoster::load(&path).unwrap();
        assert!(!roster.is_empty());

        let cardiologists = roster.find("Cardiologist", None, 2, Some(3.5));
        assert!(!cardiologists.is_empty());
        assert!(cardiologists.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = DoctorRoster::load(Path::new("/nonexistent/roster.csv"));
        assert!(result.is_err());
    }
}
