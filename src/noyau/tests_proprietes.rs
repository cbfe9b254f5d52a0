//! Tests de propriétés (proptest) : invariants du moteur sur des saisies aléatoires.

use proptest::prelude::*;

use super::moteur::Moteur;
use super::touches::Touche;

const CLAVIER: &str = "0123456789.+-*/=cn%";

fn saisir(m: &mut Moteur, touches: &str) {
    for c in touches.chars() {
        if let Some(t) = Touche::depuis_caractere(c) {
            m.appuyer(t);
        }
    }
}

prop_compose! {
    fn sequence_touches()(
        touches in prop::collection::vec(prop::sample::select(CLAVIER.chars().collect::<Vec<_>>()), 0..40)
    ) -> String {
        touches.into_iter().collect()
    }
}

/// Saisies dont l’écriture est déjà la forme affichée (pas de zéro superflu).
fn saisie_canonique() -> impl Strategy<Value = String> {
    prop_oneof![
        "[1-9][0-9]{0,9}",
        "[1-9][0-9]{0,4}\\.[0-9]{0,3}[1-9]",
        "0\\.[0-9]{0,6}[1-9]",
        "[1-9][0-9]{0,8}\\.",
    ]
}

proptest! {
    #[test]
    fn saisie_affichee_telle_quelle(saisie in saisie_canonique()) {
        let mut m = Moteur::default();
        saisir(&mut m, &saisie);
        prop_assert_eq!(m.affichage(), saisie.as_str());
        prop_assert_eq!(m.entree(), saisie.as_str());
    }

    #[test]
    fn effacer_remet_tout_a_zero(touches in sequence_touches()) {
        let mut m = Moteur::default();
        saisir(&mut m, &touches);
        m.appuyer(Touche::Effacer);

        prop_assert_eq!(m.affichage(), "0");
        prop_assert_eq!(m.entree(), "");
        prop_assert_eq!(m.operande(), "");
        prop_assert!(m.operateur_en_attente().is_none());
    }

    #[test]
    fn operateur_et_operande_vont_ensemble(touches in sequence_touches()) {
        let mut m = Moteur::default();
        for c in touches.chars() {
            if let Some(t) = Touche::depuis_caractere(c) {
                m.appuyer(t);
            }
            prop_assert_eq!(m.operateur_en_attente().is_none(), m.operande().is_empty());
        }
    }

    #[test]
    fn entree_toujours_finie(touches in sequence_touches()) {
        let mut m = Moteur::default();
        saisir(&mut m, &touches);

        if !m.entree().is_empty() {
            let v: f64 = m.entree().parse().expect("entrée lisible");
            prop_assert!(v.is_finite());
        }
    }

    #[test]
    fn double_changement_de_signe(saisie in "[0-9]{1,10}(\\.[0-9]{0,3})?") {
        let mut m = Moteur::default();
        saisir(&mut m, &saisie);
        let avant = m.entree().to_string();

        m.appuyer(Touche::ChangerSigne);
        m.appuyer(Touche::ChangerSigne);
        prop_assert_eq!(m.entree(), avant.as_str());
    }

    #[test]
    fn plafond_de_saisie(chiffres in "[0-9]{0,30}") {
        let mut m = Moteur::default();
        saisir(&mut m, &chiffres);
        prop_assert!(m.entree().len() <= 10);
        prop_assert!(chiffres.starts_with(m.entree()));
    }
}
