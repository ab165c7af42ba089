// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier physique en touches du noyau

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use calculatrice_rpn::noyau::Symbole;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

impl AppCalc {
    /// Clavier physique :
    /// - caractères tapés : via Symbole::depuis_touche ("7", "+", "(", "*", ...)
    /// - Enter = "=", Backspace = ⌫, Escape = AC
    fn clavier(&mut self, ctx: &egui::Context) {
        let (textes, entree, retour, echap) = ctx.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                textes,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
            )
        });

        for t in textes {
            for c in t.chars() {
                let mut buf = [0u8; 4];
                if let Some(s) = Symbole::depuis_touche(c.encode_utf8(&mut buf)) {
                    self.touche(s);
                }
            }
        }

        if entree {
            self.touche(Symbole::Egal);
        }
        if retour {
            self.touche(Symbole::RetourArriere);
        }
        if echap {
            self.tout_effacer();
        }
    }
}
