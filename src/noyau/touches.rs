// src/noyau/touches.rs
//
// Jetons d’entrée abstraits : la vue (boutons, clavier) ne parle au moteur
// qu’à travers `Touche`. Aucune logique de calcul ici, sauf `Operateur::appliquer`.

use std::fmt;
use std::str::FromStr;

use super::erreur::{ErreurCalc, ErreurTouche};

/// Les quatre opérations binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Division,
    ];

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Division => "÷",
        }
    }

    /// a (op) b. Seul le diviseur nul est refusé ici ; la finitude est vérifiée par l’appelant.
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurCalc> {
        match self {
            Operateur::Plus => Ok(a + b),
            Operateur::Moins => Ok(a - b),
            Operateur::Fois => Ok(a * b),
            Operateur::Division => {
                // -0.0 == 0.0 : les deux zéros sont refusés
                if b == 0.0 {
                    return Err(ErreurCalc::DivisionParZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

/// Un événement d’entrée du moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    /// 0..=9
    Chiffre(u8),
    Virgule,
    Operateur(Operateur),
    Egal,
    Effacer,
    ChangerSigne,
    Pourcentage,
}

impl Touche {
    /// Libellé affiché sur le pavé.
    pub fn symbole(self) -> &'static str {
        const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

        match self {
            Touche::Chiffre(d) => CHIFFRES.get(d as usize).copied().unwrap_or("?"),
            Touche::Virgule => ".",
            Touche::Operateur(op) => op.symbole(),
            Touche::Egal => "=",
            Touche::Effacer => "C",
            Touche::ChangerSigne => "±",
            Touche::Pourcentage => "%",
        }
    }

    /// Clavier physique : accepte quelques alias (`*`, `x`, `/`, `,`, `c`, `n`).
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        let t = match c {
            '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
            '.' | ',' => Touche::Virgule,
            '+' => Touche::Operateur(Operateur::Plus),
            '-' | '−' => Touche::Operateur(Operateur::Moins),
            '*' | 'x' | 'X' | '×' => Touche::Operateur(Operateur::Fois),
            '/' | '÷' => Touche::Operateur(Operateur::Division),
            '=' => Touche::Egal,
            'c' | 'C' => Touche::Effacer,
            'n' | 'N' | '±' => Touche::ChangerSigne,
            '%' => Touche::Pourcentage,
            _ => return None,
        };
        Some(t)
    }
}

impl FromStr for Touche {
    type Err = ErreurTouche;

    /// Libellé de bouton -> touche (un seul symbole, espaces ignorés).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inconnue = || ErreurTouche::Inconnue(s.to_string());

        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Touche::depuis_caractere(c).ok_or_else(inconnue),
            _ => Err(inconnue()),
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}
