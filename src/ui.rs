use crate::animation::Cue;
use crate::renderer::FrameRecorder;

fn color32(rgb: [f32; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(
        (rgb[0].clamp(0.0, 1.0) * 255.0) as u8,
        (rgb[1].clamp(0.0, 1.0) * 255.0) as u8,
        (rgb[2].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// One line of status text for the current frame.
pub fn status_line(cue: Option<&Cue>, auto_rotate: bool) -> String {
    match cue {
        Some(cue) => format!(
            "{}  cycle {}/{}  phase {} ({})  frame {}  #{}",
            cue.choreography,
            cue.cycle,
            cue.cycles,
            cue.phase + 1,
            cue.phase_label,
            cue.frame,
            cue.total
        ),
        None if auto_rotate => "idle, auto-rotate on (h for help)".to_string(),
        None => "idle (h for help)".to_string(),
    }
}

/// egui layer on top of the wireframe: axis labels and the status HUD.
pub struct Overlay {
    pub show_labels: bool,
    pub show_hud: bool,
}

impl Overlay {
    pub fn new(show_labels: bool, show_hud: bool) -> Self {
        Self {
            show_labels,
            show_hud,
        }
    }

    /// `size` is the viewport in points.
    pub fn show(&self, ctx: &egui::Context, frame: &FrameRecorder, size: egui::Vec2, status: &str) {
        if self.show_labels {
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Background,
                egui::Id::new("axis_label_painter"),
            ));
            let font_id = egui::FontId::proportional(14.0);

            for label in &frame.labels {
                let Some([x, y]) = frame.project(&label.position, size.x, size.y) else {
                    continue;
                };
                painter.text(
                    egui::pos2(x, y),
                    egui::Align2::LEFT_BOTTOM,
                    &label.text,
                    font_id.clone(),
                    color32(label.color),
                );
            }
        }

        if self.show_hud {
            egui::Area::new(egui::Id::new("hud"))
                .anchor(egui::Align2::LEFT_TOP, [8.0, 8.0])
                .interactable(false)
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(status)
                            .monospace()
                            .color(egui::Color32::from_gray(60)),
                    );
                });
        }
    }
}
