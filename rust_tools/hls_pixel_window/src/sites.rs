use crate::error::{PixelWindowError, Result};
use log::debug;

/// Pixel position of a site in the shared HLS tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelCoord {
    pub row: usize,
    pub col: usize,
}

// Phenocam sites on tile 13SCS (Jornada basin)
const SITES: [(&str, usize, usize); 12] = [
    ("jershrubland", 2809, 922),
    ("jershrubland2", 2817, 943),
    ("jernovel", 2892, 917),
    ("jernovel2", 2881, 935),
    ("jergrassland", 3112, 930),
    ("jergrassland2", 3109, 953),
    ("jerbajada", 3137, 1554),
    ("jernort", 2987, 1074),
    ("ibp", 3088, 894),
    ("jernwern", 2957, 1229),
    ("NEON.D14.JORN.DP1.00033", 3086, 902),
    ("jersand", 3370, 1063),
];

/// Look up the fixed pixel coordinate of a known site
pub fn resolve(site_id: &str) -> Result<PixelCoord> {
    let (_, row, col) = SITES
        .iter()
        .find(|(name, _, _)| *name == site_id)
        .ok_or_else(|| PixelWindowError::UnknownSite(site_id.to_string()))?;

    debug!("Site {} resolved to row={}, col={}", site_id, row, col);
    Ok(PixelCoord { row: *row, col: *col })
}

/// All recognized site identifiers
pub fn known_sites() -> impl Iterator<Item = &'static str> {
    SITES.iter().map(|(name, _, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_sites() {
        assert_eq!(
            resolve("jershrubland").unwrap(),
            PixelCoord { row: 2809, col: 922 }
        );
        assert_eq!(resolve("ibp").unwrap(), PixelCoord { row: 3088, col: 894 });
        assert_eq!(
            resolve("NEON.D14.JORN.DP1.00033").unwrap(),
            PixelCoord { row: 3086, col: 902 }
        );
        assert_eq!(resolve("jersand").unwrap(), PixelCoord { row: 3370, col: 1063 });
    }

    #[test]
    fn test_every_known_site_resolves() {
        assert_eq!(known_sites().count(), 12);
        for name in known_sites() {
            assert!(resolve(name).is_ok(), "{} should resolve", name);
        }
    }

    #[test]
    fn test_resolve_unknown_site() {
        assert!(matches!(
            resolve("jornada"),
            Err(PixelWindowError::UnknownSite(_))
        ));
        // No prefix or case-insensitive matching
        assert!(resolve("jershrub").is_err());
        assert!(resolve("IBP").is_err());
        assert!(resolve("").is_err());
    }
}
