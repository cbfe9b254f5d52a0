//! Erreurs du noyau.
//!
//! Aucune n’est remontée à l’appelant des touches : le moteur les consomme
//! sur place (reset + avis à usage unique).

use std::num::ParseFloatError;

use thiserror::Error;

/// Erreurs de calcul (Compute / %).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErreurCalc {
    /// Diviseur exactement nul.
    #[error("Impossible de diviser par zéro !")]
    DivisionParZero,

    /// Résultat NaN ou infini (dépassement).
    #[error("Erreur : résultat invalide")]
    ResultatInvalide,

    /// Entrée illisible : ne devrait pas arriver, l’entrée reste un décimal bien formé.
    #[error("Erreur de calcul")]
    Lecture(#[from] ParseFloatError),
}

/// Jeton d’entrée qui ne correspond à aucune touche.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurTouche {
    #[error("touche inconnue : {0:?}")]
    Inconnue(String),
}
