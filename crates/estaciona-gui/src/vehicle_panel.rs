//! Vehicle management panel

use eframe::egui::{self, Align2, Color32, FontId, RichText, Ui};
use estaciona_app::avatar;
use estaciona_store::VehicleStore;
use estaciona_types::{normalize_plate, Vehicle};

/// Length cap on the license plate input field.
const PLATE_MAX_LEN: usize = 7;

/// Panel for managing registered vehicles
pub struct VehiclePanel {
    /// Whether the add/edit form is open
    dialog_open: bool,
    /// Vehicle being edited; None while adding
    editing_id: Option<String>,
    /// Form fields
    nickname: String,
    plate: String,
    /// Vehicle id pending delete confirmation
    confirm_delete: Option<String>,
    /// Status message (message, is_error)
    status_message: Option<(String, bool)>,
}

impl VehiclePanel {
    pub fn new() -> Self {
        Self {
            dialog_open: false,
            editing_id: None,
            nickname: String::new(),
            plate: String::new(),
            confirm_delete: None,
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, store: &mut VehicleStore) {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.heading("Mis Vehículos");
        });
        ui.add_space(12.0);

        self.render_list(ui, store);

        ui.add_space(16.0);
        ui.vertical_centered_justified(|ui| {
            if ui
                .button(RichText::new("+ Agregar Vehículo").size(15.0))
                .clicked()
            {
                self.open_dialog(None);
            }
        });

        if let Some((ref msg, is_error)) = self.status_message {
            ui.add_space(12.0);
            let color = if is_error {
                Color32::LIGHT_RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(msg).color(color));
            });
        }

        self.render_dialog(ui.ctx(), store);
        self.render_delete_confirm(ui.ctx(), store);
    }

    fn render_list(&mut self, ui: &mut Ui, store: &VehicleStore) {
        if store.count() == 0 {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label("No hay vehículos registrados");
                ui.label(RichText::new("Presione Agregar para registrar uno").weak());
            });
            return;
        }

        let vehicles: Vec<Vehicle> = store.load().to_vec();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (index, vehicle) in vehicles.iter().enumerate() {
                if index > 0 {
                    ui.separator();
                }
                self.render_row(ui, vehicle);
            }
        });
    }

    fn render_row(&mut self, ui: &mut Ui, vehicle: &Vehicle) {
        ui.horizontal(|ui| {
            draw_avatar(ui, &vehicle.nickname);

            ui.vertical(|ui| {
                ui.label(RichText::new(&vehicle.nickname).strong());
                ui.label(RichText::new(&vehicle.license_plate).weak());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Eliminar").clicked() {
                    self.confirm_delete = Some(vehicle.id.clone());
                }
                if ui.button("Editar").clicked() {
                    self.open_dialog(Some(vehicle));
                }
            });
        });
    }

    fn open_dialog(&mut self, vehicle: Option<&Vehicle>) {
        match vehicle {
            Some(vehicle) => {
                self.editing_id = Some(vehicle.id.clone());
                self.nickname = vehicle.nickname.clone();
                self.plate = vehicle.license_plate.clone();
            }
            None => {
                self.editing_id = None;
                self.nickname.clear();
                self.plate.clear();
            }
        }
        self.dialog_open = true;
    }

    fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.editing_id = None;
        self.nickname.clear();
        self.plate.clear();
    }

    fn render_dialog(&mut self, ctx: &egui::Context, store: &mut VehicleStore) {
        if !self.dialog_open {
            return;
        }

        let title = if self.editing_id.is_some() {
            "Editar Vehículo"
        } else {
            "Agregar Vehículo"
        };

        let mut open = true;
        egui::Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Apodo");
                ui.text_edit_singleline(&mut self.nickname);
                ui.add_space(8.0);

                ui.label("Matrícula");
                if ui.text_edit_singleline(&mut self.plate).changed() {
                    // The form field uppercases as you type and caps length
                    self.plate = self
                        .plate
                        .to_uppercase()
                        .chars()
                        .take(PLATE_MAX_LEN)
                        .collect();
                }
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ui.button("Cancelar").clicked() {
                        self.dialog_open = false;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Guardar").clicked() {
                            self.save_vehicle(store);
                        }
                    });
                });
            });

        if !open {
            self.close_dialog();
        } else if !self.dialog_open {
            // Closed via a button this frame
            self.close_dialog();
        }
    }

    fn save_vehicle(&mut self, store: &mut VehicleStore) {
        let nickname = self.nickname.trim().to_string();
        let plate = normalize_plate(&self.plate);
        if nickname.is_empty() || plate.is_empty() {
            return;
        }

        match self.editing_id.take() {
            Some(id) => {
                store.update(Vehicle {
                    id,
                    nickname,
                    license_plate: plate,
                });
                self.status_message = Some(("Vehículo actualizado".to_string(), false));
            }
            None => {
                store.add(Vehicle::new(&nickname, &plate));
                self.status_message = Some(("Vehículo agregado".to_string(), false));
            }
        }

        self.dialog_open = false;
    }

    fn render_delete_confirm(&mut self, ctx: &egui::Context, store: &mut VehicleStore) {
        let Some(id) = self.confirm_delete.clone() else {
            return;
        };

        egui::Window::new("Confirmar eliminación")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("¿Está seguro que desea eliminar este vehículo?");
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ui.button("Cancelar").clicked() {
                        self.confirm_delete = None;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let delete = egui::Button::new(RichText::new("Eliminar").color(Color32::WHITE))
                            .fill(Color32::from_rgb(0xFF, 0x3B, 0x30));
                        if ui.add(delete).clicked() {
                            store.remove(&id);
                            self.confirm_delete = None;
                            self.status_message = Some(("Vehículo eliminado".to_string(), false));
                        }
                    });
                });
            });
    }
}

/// Paint the round initial avatar for a nickname.
fn draw_avatar(ui: &mut Ui, nickname: &str) {
    let size = 36.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let (r, g, b) = avatar::color(nickname);

    ui.painter()
        .circle_filled(rect.center(), size / 2.0, Color32::from_rgb(r, g, b));
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        avatar::initial(nickname),
        FontId::proportional(16.0),
        Color32::WHITE,
    );
}
