use crate::model::Zone;
use zoneguard_types::SourcePath;

/// Every zone whose `paths` contain `file`.
///
/// A file may belong to zero, one, or many zones. Overlapping zone
/// definitions are legal; each matching zone is evaluated independently.
pub fn zones_containing<'a>(file: &SourcePath, zones: &'a [Zone]) -> Vec<&'a Zone> {
    zones.iter().filter(|z| z.contains(file)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(name: &str, paths: &[&str]) -> Zone {
        Zone {
            name: name.to_string(),
            paths: paths.iter().map(SourcePath::new).collect(),
            uses: Vec::new(),
        }
    }

    #[test]
    fn returns_every_matching_zone() {
        let zones = vec![
            zone("broad", &["/src"]),
            zone("ui", &["/src/ui"]),
            zone("api", &["/src/api"]),
        ];

        let hits = zones_containing(&SourcePath::new("/src/ui/App.ts"), &zones);
        let names: Vec<&str> = hits.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["broad", "ui"]);
    }

    #[test]
    fn membership_respects_the_separator_boundary() {
        let zones = vec![zone("com", &["/src/com"])];
        assert!(zones_containing(&SourcePath::new("/src/common/x.ts"), &zones).is_empty());
        assert_eq!(
            zones_containing(&SourcePath::new("/src/com/x.ts"), &zones).len(),
            1
        );
    }

    #[test]
    fn file_outside_all_zones_matches_nothing() {
        let zones = vec![zone("ui", &["/src/ui"])];
        assert!(zones_containing(&SourcePath::new("/lib/x.ts"), &zones).is_empty());
    }
}
