use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;

use crate::types::AthleteProfile;

/// Leser inn utøverprofil fra disk (JSON).
/// Hvis filen ikke finnes, returneres en default-profil.
pub fn load_profile(path: &str) -> Result<AthleteProfile> {
    if Path::new(path).exists() {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("lese profil fra {path}"))?;
        let profile: AthleteProfile =
            serde_json::from_str(&contents).with_context(|| format!("parse profil i {path}"))?;
        info!("profil lastet fra {path} (ftp={:?})", profile.ftp);
        Ok(profile)
    } else {
        warn!("fant ikke profil på {path}, returnerer default");
        Ok(AthleteProfile::default())
    }
}

/// Lagrer utøverprofil til disk som JSON (pretty-print).
pub fn save_profile(profile: &AthleteProfile, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    std::fs::write(path, json).with_context(|| format!("skrive profil til {path}"))?;
    info!("profil lagret til {path} (ftp={:?})", profile.ftp);
    Ok(())
}
