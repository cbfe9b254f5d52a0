//! src/noyau/moteur.rs
//!
//! Moteur de saisie : une seule opération binaire en attente, évaluation
//! immédiate de gauche à droite (2 + 3 × 4 = 20, pas de priorité).
//!
//! Contrats :
//! - chaque touche est traitée jusqu’au bout avant lecture de l’affichage ;
//! - aucune erreur ne sort d’une touche : elle déclenche `effacer()` et laisse
//!   un avis à usage unique (`prendre_erreur`) ;
//! - `operateur` est `None` si et seulement si `operande` est vide.

use tracing::{debug, trace, warn};

use super::erreur::ErreurCalc;
use super::format::{formater_nombre, vers_entree};
use super::touches::{Operateur, Touche};
use crate::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct Moteur {
    /// Opérande en cours de saisie ("" = rien de saisi).
    entree: String,
    /// Opérande précédent, "" si aucune opération en attente.
    operande: String,
    operateur: Option<Operateur>,

    /// Le prochain chiffre commence une nouvelle entrée.
    attente_nouvelle_entree: bool,
    /// Un opérateur vient d’être choisi : un second le remplace sans calculer.
    operateur_vient_detre_saisi: bool,

    affichage: String,
    erreur: Option<ErreurCalc>,

    reglages: Reglages,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl Moteur {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            entree: String::new(),
            operande: String::new(),
            operateur: None,
            attente_nouvelle_entree: true,
            operateur_vient_detre_saisi: false,
            affichage: "0".to_string(),
            erreur: None,
            reglages,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn entree(&self) -> &str {
        &self.entree
    }

    pub fn operande(&self) -> &str {
        &self.operande
    }

    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.operateur
    }

    /// Ligne secondaire : "12 ×" tant qu’une opération attend son second opérande.
    pub fn expression_en_attente(&self) -> String {
        match self.operateur {
            Some(op) if !self.operande.is_empty() => {
                let a = self
                    .operande
                    .parse::<f64>()
                    .map(|v| formater_nombre(v, self.reglages.decimales))
                    .unwrap_or_else(|_| self.operande.clone());
                format!("{a} {op}")
            }
            _ => String::new(),
        }
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    /// Avis d’erreur à usage unique : le second appel renvoie `None`.
    pub fn prendre_erreur(&mut self) -> Option<ErreurCalc> {
        self.erreur.take()
    }

    /* ------------------------ Touches ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) {
        trace!(?touche, "touche");
        match touche {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Virgule => self.virgule(),
            Touche::Operateur(op) => self.operateur(op),
            Touche::Egal => self.egal(),
            Touche::Effacer => self.effacer(),
            Touche::ChangerSigne => self.changer_signe(),
            Touche::Pourcentage => self.pourcentage(),
        }
    }

    pub fn chiffre(&mut self, d: u8) {
        if d > 9 {
            warn!(d, "chiffre hors 0..=9 ignoré");
            return;
        }
        let c = char::from(b'0' + d);

        if self.attente_nouvelle_entree {
            self.entree.clear();
            self.entree.push(c);
            self.attente_nouvelle_entree = false;
        } else if self.entree.len() < self.reglages.max_chiffres {
            self.entree.push(c);
        }

        self.operateur_vient_detre_saisi = false;
        self.afficher_entree_formatee();
    }

    pub fn virgule(&mut self) {
        if self.attente_nouvelle_entree {
            self.entree = "0.".to_string();
            self.attente_nouvelle_entree = false;
        } else if self.entree.is_empty() {
            self.entree = "0.".to_string();
        } else if !self.entree.contains('.') && self.entree.len() < self.reglages.max_chiffres {
            self.entree.push('.');
        }

        self.operateur_vient_detre_saisi = false;
        // brut : le point final reste visible
        self.affichage = self.entree.clone();
    }

    pub fn operateur(&mut self, op: Operateur) {
        if self.operateur_vient_detre_saisi && self.operateur.is_some() {
            self.operateur = Some(op);
            return;
        }

        if self.entree.is_empty() {
            return;
        }

        if !self.operande.is_empty() && !self.operateur_vient_detre_saisi {
            if let Err(e) = self.calculer() {
                self.signaler(e);
                return;
            }
        }

        self.operande = std::mem::take(&mut self.entree);
        self.operateur = Some(op);
        self.operateur_vient_detre_saisi = true;
        self.attente_nouvelle_entree = false;
    }

    pub fn egal(&mut self) {
        self.operateur_vient_detre_saisi = false;

        if self.operande.is_empty() || self.entree.is_empty() || self.operateur.is_none() {
            return;
        }

        if let Err(e) = self.calculer() {
            self.signaler(e);
            return;
        }

        self.operande.clear();
        self.operateur = None;
        self.attente_nouvelle_entree = true;
    }

    /// Remise à zéro complète ; aussi la sortie de toute erreur.
    pub fn effacer(&mut self) {
        self.entree.clear();
        self.operande.clear();
        self.operateur = None;
        self.attente_nouvelle_entree = true;
        self.operateur_vient_detre_saisi = false;
        self.affichage = "0".to_string();
    }

    pub fn changer_signe(&mut self) {
        if self.entree.is_empty() || self.entree == "0" {
            return;
        }

        if let Some(sans) = self.entree.strip_prefix('-') {
            self.entree = sans.to_string();
        } else {
            self.entree.insert(0, '-');
        }

        self.afficher_entree_formatee();
    }

    pub fn pourcentage(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        let r = self
            .valeur_entree()
            .map_err(|_| ErreurCalc::ResultatInvalide)
            .map(|n| n / 100.0)
            .and_then(verifier_fini);

        match r {
            Ok(v) => self.deposer_resultat(v),
            Err(e) => self.signaler(e),
        }
    }

    /* ------------------------ Interne ------------------------ */

    /// Compute : operande (op) entree -> entree. Ne modifie rien en cas d’erreur.
    fn calculer(&mut self) -> Result<(), ErreurCalc> {
        let Some(op) = self.operateur else {
            return Ok(());
        };

        let a: f64 = self.operande.parse()?;
        let b = self.valeur_entree()?;
        let r = verifier_fini(op.appliquer(a, b)?)?;

        debug!(a, %op, b, r, "calcul");
        self.deposer_resultat(r);
        Ok(())
    }

    fn valeur_entree(&self) -> Result<f64, ErreurCalc> {
        Ok(self.entree.parse::<f64>()?)
    }

    fn deposer_resultat(&mut self, v: f64) {
        self.entree = vers_entree(v);
        self.affichage = formater_nombre(v, self.reglages.decimales);
    }

    fn afficher_entree_formatee(&mut self) {
        match self.valeur_entree() {
            Ok(v) => self.affichage = formater_nombre(v, self.reglages.decimales),
            Err(e) => self.signaler(e),
        }
    }

    /// Chemin d’erreur : reset immédiat puis avis.
    fn signaler(&mut self, e: ErreurCalc) {
        warn!(erreur = ?e, "calcul abandonné, remise à zéro");
        self.effacer();
        self.erreur = Some(e);
    }
}

fn verifier_fini(v: f64) -> Result<f64, ErreurCalc> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalc::ResultatInvalide)
    }
}
