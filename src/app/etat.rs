//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur et l’avis transitoire (le « toast » d’erreur).
//!
//! Contrats :
//! - Toute touche passe par `appuyer` (boutons ET clavier).
//! - Une erreur du moteur devient un avis daté sur l’horloge egui (natif + web),
//!   le moteur est déjà remis à zéro quand l’avis apparaît.

use crate::noyau::{Moteur, Touche};
use crate::reglages::Reglages;

/// Message transitoire, non bloquant.
#[derive(Clone, Debug, PartialEq)]
pub struct Avis {
    pub message: String,
    /// Instant (secondes, horloge `egui::InputState::time`) où l’avis disparaît.
    pub expire: f64,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: Moteur,
    pub avis: Option<Avis>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            moteur: Moteur::new(reglages),
            avis: None,
        }
    }

    /// Transmet une touche au moteur, puis relève l’éventuelle erreur. `maintenant` en secondes.
    pub fn appuyer(&mut self, touche: Touche, maintenant: f64) {
        self.moteur.appuyer(touche);

        if let Some(e) = self.moteur.prendre_erreur() {
            let duree = self.moteur.reglages().duree_avis_ms as f64 / 1000.0;
            self.avis = Some(Avis {
                message: e.to_string(),
                expire: maintenant + duree,
            });
        }
    }

    /// Retire l’avis expiré. Renvoie le temps restant s’il y en a encore un.
    pub fn expirer_avis(&mut self, maintenant: f64) -> Option<f64> {
        let reste = self.avis.as_ref().map(|a| a.expire - maintenant)?;
        if reste <= 0.0 {
            self.avis = None;
            return None;
        }
        Some(reste)
    }
}
