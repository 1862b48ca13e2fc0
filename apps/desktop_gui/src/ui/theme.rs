use eframe::egui;
use shared::{domain::VisitType, toast::ToastKind};

pub fn visit_type_color(visit_type: VisitType) -> egui::Color32 {
    match visit_type {
        VisitType::Consult => egui::Color32::from_rgb(76, 175, 80),
        VisitType::Revisit => egui::Color32::from_rgb(54, 79, 244),
    }
}

pub fn toast_colors(kind: ToastKind) -> (egui::Color32, egui::Stroke) {
    match kind {
        ToastKind::Success => (
            egui::Color32::from_rgb(46, 106, 62),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(96, 175, 118)),
        ),
        ToastKind::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
        ),
    }
}

pub const DELETE_TEXT: egui::Color32 = egui::Color32::from_rgb(214, 69, 65);
