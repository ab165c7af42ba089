// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran : expression + ')' implicites en plus clair, défile vers la droite
// - Pavé 5×4 : AC ( ) ÷ / 7 8 9 × / 4 5 6 - / 1 2 3 + / ^ 0 . =
// - Démarche : infixe, normalisé, RPN de la dernière évaluation
//
// Note :
// - Le clavier physique est géré dans app.rs (une seule lecture des événements)

use eframe::egui;

use calculatrice_rpn::noyau::saisie::{PRECISION_MAX, TEXTE_INDEFINI};
use calculatrice_rpn::noyau::Symbole;

use super::etat::AppCalc;

/// Pavé (hors touche d’effacement, placée en tête).
const PAVE: [[&str; 4]; 5] = [
    ["", "(", ")", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["^", "0", ".", "="],
];

const TAILLE_ECRAN: f32 = 44.0;
const TAILLE_ECRAN_INDEFINI: f32 = 34.0;
const TAILLE_TOUCHE: [f32; 2] = [72.0, 52.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        ui.heading("Calculatrice RPN");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(10.0);
        self.ui_pave(ui);

        ui.add_space(10.0);
        ui.separator();
        self.ui_reglages(ui);

        ui.add_space(6.0);
        self.ui_demarche(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let texte = self.calc.texte_affiche();
        let taille = if texte == TEXTE_INDEFINI {
            TAILLE_ECRAN_INDEFINI
        } else {
            TAILLE_ECRAN
        };
        let police = egui::FontId::proportional(taille);

        let mut job = egui::text::LayoutJob::default();
        job.append(
            texte,
            0.0,
            egui::TextFormat {
                font_id: police.clone(),
                color: ui.visuals().strong_text_color(),
                ..Default::default()
            },
        );

        // ')' implicites : fermées automatiquement au "="
        let attente = self.calc.parentheses_en_attente();
        if !attente.is_empty() {
            job.append(
                &attente,
                0.0,
                egui::TextFormat {
                    font_id: police,
                    color: ui.visuals().weak_text_color(),
                    ..Default::default()
                },
            );
        }

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                egui::ScrollArea::horizontal()
                    .stick_to_right(true)
                    .show(ui, |ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(job);
                        });
                    });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for etiquette in rangee {
                        if etiquette.is_empty() {
                            self.bouton_effacer(ui);
                        } else {
                            self.bouton_touche(ui, etiquette);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton_effacer(&mut self, ui: &mut egui::Ui) {
        let etiquette = self.etiquette_effacer();
        let tip = if etiquette == "AC" {
            "Remise à zéro"
        } else {
            "Efface le dernier symbole"
        };
        let resp = ui
            .add_sized(TAILLE_TOUCHE, egui::Button::new(etiquette))
            .on_hover_text(tip);
        if resp.clicked() {
            self.touche_effacer();
        }
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, etiquette: &str) {
        let texte = egui::RichText::new(etiquette).size(22.0);
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(texte));
        if !resp.clicked() {
            return;
        }
        if let Some(s) = Symbole::depuis_touche(etiquette) {
            self.touche(s);
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Précision :");
            let mut d = self.calc.precision() as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=PRECISION_MAX as u32)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_decimales(d as usize);
            }
        });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| match self.calc.derniere_demarche() {
                Some(d) => {
                    Self::champ_demarche(ui, "Infixe", &d.infixe);
                    Self::champ_demarche(ui, "Normalisé", &d.normalise);
                    Self::champ_demarche(ui, "RPN", &d.rpn_texte());
                }
                None => {
                    ui.monospace("aucune évaluation");
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, contenu: &str) {
        ui.horizontal(|ui| {
            ui.label(format!("{titre} :"));
            ui.monospace(contenu);
        });
    }
}
