//! Vehicle store for registered vehicles

use estaciona_types::{Result, Vehicle};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Persistent store for registered vehicles
///
/// The whole collection lives in one JSON file, ordered; every mutation
/// replaces the full sequence (read, transform in memory, write back).
/// There is no partial update and no locking: single process, single
/// writer.
pub struct VehicleStore {
    store_path: PathBuf,
    vehicles: Vec<Vehicle>,
}

impl VehicleStore {
    /// Create or load a vehicle store under `store_dir`.
    ///
    /// A missing file means an empty collection. A file that fails to
    /// parse also means an empty collection: the failure is logged and
    /// swallowed, never surfaced.
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("vehicles.json");

        let vehicles = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(vehicles) => vehicles,
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", store_path.display(), e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Ok(Self { store_path, vehicles })
    }

    /// All vehicles, in insertion order.
    pub fn load(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Replace the whole collection and persist it.
    ///
    /// The in-memory state always reflects the caller's write; a write
    /// failure is logged and swallowed (optimistic update, memory may
    /// diverge from disk until the next successful save).
    pub fn replace_all(&mut self, vehicles: Vec<Vehicle>) {
        self.vehicles = vehicles;
        if let Err(e) = self.persist() {
            log::error!("Failed to save {}: {}", self.store_path.display(), e);
        }
    }

    /// Append a vehicle and return its id.
    ///
    /// Ids are clock-derived, so two vehicles created within the same
    /// millisecond arrive with the same id; the store bumps the new id
    /// until it is unique before inserting.
    pub fn add(&mut self, mut vehicle: Vehicle) -> String {
        while self.vehicles.iter().any(|v| v.id == vehicle.id) {
            vehicle.id = next_id(&vehicle.id);
        }
        let id = vehicle.id.clone();
        let mut vehicles = self.vehicles.clone();
        vehicles.push(vehicle);
        self.replace_all(vehicles);
        id
    }

    /// Replace the vehicle with the same id, in place. Returns false if
    /// no vehicle has that id.
    pub fn update(&mut self, vehicle: Vehicle) -> bool {
        let mut vehicles = self.vehicles.clone();
        match vehicles.iter_mut().find(|v| v.id == vehicle.id) {
            Some(slot) => {
                *slot = vehicle;
                self.replace_all(vehicles);
                true
            }
            None => false,
        }
    }

    /// Remove the vehicle with the given id, leaving the order of the
    /// rest unchanged. Returns false if no vehicle has that id.
    pub fn remove(&mut self, id: &str) -> bool {
        let vehicles: Vec<Vehicle> = self
            .vehicles
            .iter()
            .filter(|v| v.id != id)
            .cloned()
            .collect();
        if vehicles.len() == self.vehicles.len() {
            return false;
        }
        self.replace_all(vehicles);
        true
    }

    /// Get a vehicle by id.
    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Find a vehicle by license plate.
    pub fn find_by_plate(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.license_plate == plate)
    }

    /// Find a vehicle by nickname.
    pub fn find_by_nickname(&self, nickname: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.nickname == nickname)
    }

    /// Total vehicle count.
    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.vehicles)?;
        Ok(())
    }
}

/// The next candidate id after a collision: numeric ids increment, anything
/// else gets a suffix.
fn next_id(id: &str) -> String {
    match id.parse::<i64>() {
        Ok(n) => (n + 1).to_string(),
        Err(_) => format!("{}-1", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn vehicle(id: &str, nickname: &str, plate: &str) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            nickname: nickname.to_string(),
            license_plate: plate.to_string(),
        }
    }

    #[test]
    fn load_with_no_file_yields_empty() {
        let dir = tempdir().unwrap();
        let store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_order_and_fields() {
        let dir = tempdir().unwrap();
        let vehicles = vec![
            vehicle("1", "Auto", "ABC123"),
            vehicle("2", "Camioneta", "XYZ789"),
            vehicle("3", "Moto", "MNO456"),
        ];

        let mut store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        store.replace_all(vehicles.clone());
        drop(store);

        let reopened = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.load(), vehicles.as_slice());
    }

    #[test]
    fn malformed_file_yields_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("vehicles.json"), "{not valid json").unwrap();

        let store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn remove_deletes_exactly_one_id_and_preserves_order() {
        let dir = tempdir().unwrap();
        let mut store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        store.replace_all(vec![
            vehicle("1", "A", "AAA111"),
            vehicle("2", "B", "BBB222"),
            vehicle("3", "C", "CCC333"),
        ]);

        assert!(store.remove("2"));
        let ids: Vec<_> = store.load().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);

        // Removal persists
        drop(store);
        let reopened = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        let ids: Vec<_> = reopened.load().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let dir = tempdir().unwrap();
        let mut store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        store.add(vehicle("1", "A", "AAA111"));

        assert!(!store.remove("99"));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn update_replaces_in_place() {
        let dir = tempdir().unwrap();
        let mut store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        store.replace_all(vec![
            vehicle("1", "A", "AAA111"),
            vehicle("2", "B", "BBB222"),
        ]);

        assert!(store.update(vehicle("1", "A2", "DDD444")));
        let ids: Vec<_> = store.load().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(store.get("1").unwrap().nickname, "A2");
    }

    #[test]
    fn add_bumps_colliding_ids_until_unique() {
        let dir = tempdir().unwrap();
        let mut store = VehicleStore::open(dir.path().to_path_buf()).unwrap();

        let first = store.add(vehicle("100", "A", "AAA111"));
        let second = store.add(vehicle("100", "B", "BBB222"));
        let third = store.add(vehicle("100", "C", "CCC333"));

        assert_eq!(first, "100");
        assert_eq!(second, "101");
        assert_eq!(third, "102");

        // Removing one colliding creation must not take the others with it
        assert!(store.remove(&second));
        let nicknames: Vec<_> = store.load().iter().map(|v| v.nickname.as_str()).collect();
        assert_eq!(nicknames, ["A", "C"]);
    }

    #[test]
    fn add_suffixes_non_numeric_id_collisions() {
        let dir = tempdir().unwrap();
        let mut store = VehicleStore::open(dir.path().to_path_buf()).unwrap();

        store.add(vehicle("abc", "A", "AAA111"));
        let second = store.add(vehicle("abc", "B", "BBB222"));
        assert_eq!(second, "abc-1");
    }

    #[test]
    fn vehicles_created_in_the_same_millisecond_get_distinct_ids() {
        let dir = tempdir().unwrap();
        let mut store = VehicleStore::open(dir.path().to_path_buf()).unwrap();

        // Vehicle::new derives ids from the clock; back-to-back creations
        // regularly land in the same millisecond.
        let first = store.add(Vehicle::new("Auto", "ABC123"));
        let second = store.add(Vehicle::new("Camioneta", "DEF456"));

        assert_ne!(first, second);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn add_flow_uppercases_the_plate() {
        let dir = tempdir().unwrap();
        let mut store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        store.add(Vehicle::new("Auto", "abc123"));
        drop(store);

        let reopened = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.load()[0].license_plate, "ABC123");
    }

    #[test]
    fn lookup_by_plate_and_nickname() {
        let dir = tempdir().unwrap();
        let mut store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        store.add(vehicle("1", "Auto", "ABC123"));

        assert_eq!(store.find_by_plate("ABC123").unwrap().id, "1");
        assert_eq!(store.find_by_nickname("Auto").unwrap().id, "1");
        assert!(store.find_by_plate("ZZZ999").is_none());
    }
}
