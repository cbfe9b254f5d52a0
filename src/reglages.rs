//! src/reglages.rs
//!
//! Réglages de la calculatrice (fichier TOML optionnel, natif uniquement).
//!
//! ```toml
//! max_chiffres = 10
//! decimales = 10
//! duree_avis_ms = 2000
//! ```
//!
//! Priorité : `$CALCULADORA_REGLAGES`, puis `<config>/calculadora/reglages.toml`,
//! puis valeurs par défaut. Un fichier cassé n’empêche jamais le démarrage.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Longueur maximale de l’entrée par défaut (chiffres, '.', '-').
const MAX_CHIFFRES_DEFAUT: usize = 10;

/// Au-delà, une entrée saisie ne tient plus exactement dans un f64.
const MAX_CHIFFRES_BORNE: usize = 15;

const DECIMALES_DEFAUT: usize = 10;
const DECIMALES_MAX: usize = 15;

const DUREE_AVIS_DEFAUT_MS: u64 = 2000;
const DUREE_AVIS_MIN_MS: u64 = 500;
const DUREE_AVIS_MAX_MS: u64 = 10_000;

#[cfg(not(target_arch = "wasm32"))]
const VAR_CHEMIN: &str = "CALCULADORA_REGLAGES";

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture impossible de {chemin}: {source}")]
    Lecture {
        chemin: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML invalide : {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Reglages {
    /// Nombre maximal de caractères de l’entrée courante.
    pub max_chiffres: usize,
    /// Chiffres après le point pour une valeur calculée.
    pub decimales: usize,
    /// Durée de vie d’un avis d’erreur.
    pub duree_avis_ms: u64,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            max_chiffres: MAX_CHIFFRES_DEFAUT,
            decimales: DECIMALES_DEFAUT,
            duree_avis_ms: DUREE_AVIS_DEFAUT_MS,
        }
    }
}

impl Reglages {
    /// Garde-fou : ramène chaque valeur dans ses bornes.
    pub fn bornes(mut self) -> Self {
        self.max_chiffres = self.max_chiffres.clamp(1, MAX_CHIFFRES_BORNE);
        self.decimales = self.decimales.min(DECIMALES_MAX);
        self.duree_avis_ms = self
            .duree_avis_ms
            .clamp(DUREE_AVIS_MIN_MS, DUREE_AVIS_MAX_MS);
        self
    }

    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        let r: Reglages = toml::from_str(texte)?;
        Ok(r.bornes())
    }

    /// Chemin du fichier de réglages (variable d’environnement d’abord).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn chemin() -> Option<PathBuf> {
        if let Some(p) = std::env::var_os(VAR_CHEMIN) {
            return Some(PathBuf::from(p));
        }
        dirs::config_dir().map(|d| d.join("calculadora").join("reglages.toml"))
    }

    /// Lit un fichier précis. Fichier absent => `Ok(None)`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn lire(chemin: &std::path::Path) -> Result<Option<Self>, ErreurReglages> {
        let texte = match std::fs::read_to_string(chemin) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ErreurReglages::Lecture {
                    chemin: chemin.to_path_buf(),
                    source,
                })
            }
        };
        Self::depuis_toml(&texte).map(Some)
    }

    /// Chargement au démarrage : n’échoue jamais (défauts + warn).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger() -> Self {
        let Some(chemin) = Self::chemin() else {
            tracing::debug!("aucun répertoire de configuration, réglages par défaut");
            return Self::default();
        };

        match Self::lire(&chemin) {
            Ok(Some(r)) => {
                tracing::info!(chemin = %chemin.display(), ?r, "réglages chargés");
                r
            }
            Ok(None) => {
                tracing::debug!(chemin = %chemin.display(), "pas de fichier de réglages");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(erreur = %e, "réglages ignorés, valeurs par défaut");
                Self::default()
            }
        }
    }
}
