//! Park screen: pick a vehicle and duration, double-press to send

use eframe::egui::{self, Color32, RichText, Ui};
use estaciona_app::confirm::{Activation, ConfirmGesture, HINT_WINDOW};
use estaciona_app::{duration, mail};
use estaciona_store::{LastUsedStore, VehicleStore};
use estaciona_types::ParkingRequest;
use std::time::Instant;

/// Panel for composing a parking request
pub struct ParkPanel {
    /// Selected vehicle id
    selected_id: Option<String>,
    /// Selected duration in minutes
    minutes: u32,
    /// Two-step confirm state
    gesture: ConfirmGesture,
    /// Status message (message, is_error)
    status_message: Option<(String, bool)>,
}

impl ParkPanel {
    pub fn new(store: &VehicleStore, last_used: &LastUsedStore) -> Self {
        let mut panel = Self {
            selected_id: None,
            minutes: 30,
            gesture: ConfirmGesture::new(),
            status_message: None,
        };
        panel.ensure_selection(store, last_used);
        panel
    }

    /// Called when the user navigates away from this tab.
    pub fn on_leave(&mut self) {
        self.gesture.reset();
        self.status_message = None;
    }

    pub fn ui(&mut self, ui: &mut Ui, store: &VehicleStore, last_used: &LastUsedStore) {
        self.ensure_selection(store, last_used);

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.heading("Estacionar");
        });
        ui.add_space(16.0);

        if store.count() == 0 {
            ui.vertical_centered(|ui| {
                ui.label("No hay vehículos registrados");
                ui.label(RichText::new("Agregue uno en Mis Vehículos").weak());
            });
            return;
        }

        self.render_vehicle_select(ui, store);
        ui.add_space(12.0);
        self.render_duration_select(ui);
        ui.add_space(20.0);
        self.render_request_button(ui, store, last_used);

        if let Some((ref msg, is_error)) = self.status_message {
            ui.add_space(16.0);
            let color = if is_error {
                Color32::LIGHT_RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(msg).color(color));
            });
        }
    }

    /// Default selection: last used vehicle if it still exists, else the
    /// first one. Also clears a selection whose vehicle was deleted.
    fn ensure_selection(&mut self, store: &VehicleStore, last_used: &LastUsedStore) {
        let valid = self
            .selected_id
            .as_ref()
            .is_some_and(|id| store.get(id).is_some());
        if valid {
            return;
        }

        self.selected_id = last_used
            .get()
            .filter(|id| store.get(id).is_some())
            .or_else(|| store.load().first().map(|v| v.id.clone()));
        self.gesture.reset();
    }

    fn render_vehicle_select(&mut self, ui: &mut Ui, store: &VehicleStore) {
        let selected_label = self
            .selected_id
            .as_ref()
            .and_then(|id| store.get(id))
            .map(|v| v.nickname.clone())
            .unwrap_or_default();

        ui.label("Seleccionar Vehículo");
        egui::ComboBox::from_id_salt("vehicle_select")
            .width(ui.available_width())
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for vehicle in store.load() {
                    let selected = self.selected_id.as_deref() == Some(vehicle.id.as_str());
                    if ui.selectable_label(selected, &vehicle.nickname).clicked() && !selected {
                        self.selected_id = Some(vehicle.id.clone());
                        // Changing the vehicle disarms the confirm
                        self.gesture.reset();
                    }
                }
            });
    }

    fn render_duration_select(&mut self, ui: &mut Ui) {
        let options = duration::options();
        let selected_label = options
            .iter()
            .find(|o| o.minutes == self.minutes)
            .map(|o| o.label.clone())
            .unwrap_or_default();

        ui.label("Seleccionar Duración");
        egui::ComboBox::from_id_salt("duration_select")
            .width(ui.available_width())
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for option in &options {
                    let selected = self.minutes == option.minutes;
                    if ui.selectable_label(selected, &option.label).clicked() && !selected {
                        self.minutes = option.minutes;
                        // Changing the duration disarms the confirm
                        self.gesture.reset();
                    }
                }
            });
    }

    fn render_request_button(
        &mut self,
        ui: &mut Ui,
        store: &VehicleStore,
        last_used: &LastUsedStore,
    ) {
        let now = Instant::now();
        let armed = self.gesture.armed();
        let label = if armed {
            "Confirmar Estacionamiento"
        } else {
            "Obtener Estacionamiento"
        };
        let fill = if armed {
            Color32::from_rgb(0x34, 0xC7, 0x59)
        } else {
            Color32::from_rgb(0x00, 0x7A, 0xFF)
        };

        let button = egui::Button::new(RichText::new(label).size(16.0).color(Color32::WHITE))
            .fill(fill)
            .min_size(egui::vec2(ui.available_width(), 48.0));

        if ui.add(button).clicked() {
            if self.gesture.activate(now) == Activation::Confirmed {
                self.send_request(store, last_used);
            } else {
                self.status_message = None;
            }
        }

        if self.gesture.hint_visible(now) {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Presione nuevamente para confirmar").weak());
            });
            // Wake up again so the hint disappears on time
            ui.ctx().request_repaint_after(HINT_WINDOW);
        }
    }

    fn send_request(&mut self, store: &VehicleStore, last_used: &LastUsedStore) {
        let Some(vehicle) = self.selected_id.as_ref().and_then(|id| store.get(id)) else {
            return;
        };

        last_used.set(&vehicle.id);

        let request = ParkingRequest::new(vehicle.license_plate.clone(), self.minutes);
        match mail::send(&request) {
            Ok(()) => {
                self.status_message =
                    Some(("Solicitud de estacionamiento enviada".to_string(), false));
            }
            Err(e) => {
                log::error!("Error sending email: {}", e);
                self.status_message = Some((
                    "Error al enviar la solicitud. Intente nuevamente.".to_string(),
                    true,
                ));
            }
        }
    }
}
