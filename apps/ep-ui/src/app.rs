use crate::canvas;
use ep_core::{s, seconds};
use ep_sim::{AnimationClock, EpicycleConfig, EpicycleSimulator, Preset, SimResult};

/// Longest frame step fed to the clock, so a stalled window does not skip a
/// whole cycle when it wakes up.
const MAX_DT_S: f32 = 0.1;

pub struct EpicycleApp {
    sim: EpicycleSimulator,
    clock: AnimationClock,
    preset: Preset,
    last_error: Option<String>,
}

impl EpicycleApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> SimResult<Self> {
        let preset = Preset::default();
        let config = EpicycleConfig::preset(preset);
        let mut sim = EpicycleSimulator::from_entropy(config)?;
        sim.start();
        tracing::info!(
            preset = %preset,
            components = sim.components().len(),
            "viewer started"
        );

        Ok(Self {
            sim,
            clock: AnimationClock::new(config.cycle),
            preset,
            last_error: None,
        })
    }

    fn anew(&mut self) {
        self.sim.reset();
        self.clock.reset();
        tracing::info!(components = self.sim.components().len(), "new chain");
    }

    fn toggle_running(&mut self) {
        if self.sim.is_running() {
            self.sim.stop();
        } else {
            self.sim.start();
        }
    }

    fn select_preset(&mut self, preset: Preset) {
        let config = EpicycleConfig::preset(preset);
        match self.sim.reconfigure(config) {
            Ok(()) => {
                self.preset = preset;
                self.clock = AnimationClock::new(config.cycle);
                self.last_error = None;
                tracing::info!(preset = %preset, "preset selected");
            }
            Err(e) => {
                tracing::error!("failed to apply preset {preset}: {e}");
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn step(&mut self, dt_s: f32) {
        if !self.sim.is_running() {
            return;
        }
        let tick = self.clock.tick(s(dt_s.min(MAX_DT_S) as f64));
        self.sim.advance(tick.progress);
        if tick.finished {
            self.sim.finish_cycle();
        }
    }
}

impl eframe::App for EpicycleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt_s = ctx.input(|i| i.stable_dt);
        self.step(dt_s);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Anew").clicked() {
                    self.anew();
                }

                let label = if self.sim.is_running() { "Pause" } else { "Play" };
                if ui.button(label).clicked() {
                    self.toggle_running();
                }

                ui.separator();

                let mut selected = self.preset;
                egui::ComboBox::from_id_salt("preset_selector")
                    .selected_text(selected.name())
                    .show_ui(ui, |ui| {
                        for preset in Preset::ALL {
                            ui.selectable_value(&mut selected, preset, preset.name());
                        }
                    });
                if selected != self.preset {
                    self.select_preset(selected);
                }

                ui.separator();
                ui.label(format!("{} components", self.sim.components().len()));
                ui.label(format!(
                    "{:.1} / {:.0} s",
                    seconds(self.clock.elapsed()),
                    self.sim.config().cycle.length_s
                ));

                if let Some(err) = &self.last_error {
                    ui.separator();
                    ui.colored_label(egui::Color32::RED, err);
                }
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                canvas::paint(
                    &painter,
                    response.rect,
                    self.sim.components().reach(),
                    self.sim.geometry(),
                );
            });

        if self.sim.is_running() {
            ctx.request_repaint();
        }
    }
}
