//! Main application structure with tab navigation

use eframe::egui;
use estaciona_app::config::Config;
use estaciona_store::{LastUsedStore, VehicleStore};

use crate::park_panel::ParkPanel;
use crate::vehicle_panel::VehiclePanel;

/// Application tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Park,
    Vehicles,
}

impl Tab {
    /// Get the label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Park => "Estacionar",
            Tab::Vehicles => "Mis Vehículos",
        }
    }
}

/// Main application state
pub struct EstacionaApp {
    /// Currently selected tab
    current_tab: Tab,
    /// Park panel state
    park_panel: ParkPanel,
    /// Vehicle panel state
    vehicle_panel: VehiclePanel,
    /// Vehicle store
    store: VehicleStore,
    /// Last-used vehicle marker
    last_used: LastUsedStore,
}

impl EstacionaApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Larger widgets for touch use
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.interact_size.y = 36.0;
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_default();

        let store_dir = config
            .store_dir()
            .unwrap_or_else(|_| std::env::temp_dir().join("estaciona"));
        let store = VehicleStore::open(store_dir.clone()).unwrap_or_else(|_| {
            let fallback_dir = std::env::temp_dir().join("estaciona-fallback");
            VehicleStore::open(fallback_dir).expect("Failed to create fallback store")
        });
        let last_used = LastUsedStore::open(store_dir).unwrap_or_else(|_| {
            let fallback_dir = std::env::temp_dir().join("estaciona-fallback");
            LastUsedStore::open(fallback_dir).expect("Failed to create fallback marker")
        });

        let park_panel = ParkPanel::new(&store, &last_used);

        Self {
            current_tab: Tab::default(),
            park_panel,
            vehicle_panel: VehiclePanel::new(),
            store,
            last_used,
        }
    }

    /// Render the tab bar
    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            for (i, tab) in [Tab::Park, Tab::Vehicles].into_iter().enumerate() {
                columns[i].vertical_centered_justified(|ui| {
                    let selected = self.current_tab == tab;
                    if ui.selectable_label(selected, tab.label()).clicked()
                        && self.current_tab != tab
                    {
                        self.current_tab = tab;
                        // Leaving the park screen disarms any pending confirm
                        self.park_panel.on_leave();
                    }
                });
            }
        });
    }
}

impl eframe::App for EstacionaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Bottom panel with tab bar, as on the phone UI
        egui::TopBottomPanel::bottom("tab_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            self.render_tab_bar(ui);
            ui.add_space(6.0);
        });

        // Central panel with selected tab content
        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab {
            Tab::Park => {
                self.park_panel.ui(ui, &self.store, &self.last_used);
            }
            Tab::Vehicles => {
                self.vehicle_panel.ui(ui, &mut self.store);
            }
        });
    }
}
