//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - touches.rs : jetons d’entrée (Touche, Operateur) + correspondance libellés/clavier
//! - moteur.rs  : machine à états de saisie (entrée, opérande, opérateur en attente)
//! - format.rs  : affichage des valeurs calculées
//! - erreur.rs  : erreurs de calcul et de touche
//!
//! Le noyau ne fait aucune E/S.

pub mod erreur;
pub mod format;
pub mod moteur;
pub mod touches;


#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use moteur::Moteur;
pub use touches::{Operateur, Touche};
