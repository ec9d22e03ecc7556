//! The inventory store: in-memory car list plus its CSV backing file

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::debug;
use zaiko_types::{Car, CarStatus, Error, Result};

use crate::filter::SearchFilter;

/// CSV header row, written verbatim as row 1 of the backing file
const HEADER: [&str; 5] = ["Make", "Model", "Year", "Price", "Status"];

/// Persistent store for the dealership inventory
///
/// Owns the record list exclusively; callers get borrowed views for
/// rendering. Every operation that changes the list rewrites the whole
/// backing file before returning.
#[derive(Debug)]
pub struct Inventory {
    file_path: PathBuf,
    cars: Vec<Car>,
}

impl Inventory {
    /// Create or load an inventory at the given file path
    ///
    /// A missing file is created with just the header row. An existing file
    /// is read row by row in file order; any malformed row fails the whole
    /// open, no partial inventory is accepted.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();

        let inventory = if file_path.exists() {
            let cars = load_cars(&file_path)?;
            debug!(path = %file_path.display(), count = cars.len(), "loaded inventory");
            Self { file_path, cars }
        } else {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let inventory = Self {
                file_path,
                cars: Vec::new(),
            };
            inventory.persist()?;
            debug!(path = %inventory.file_path.display(), "created empty inventory file");
            inventory
        };

        Ok(inventory)
    }

    /// Current record list, in insertion/file order
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Add a car from raw field text and persist
    ///
    /// Status starts out `Available`. A year/price parse failure propagates
    /// before anything is mutated or written.
    pub fn add_car(&mut self, make: &str, model: &str, year: &str, price: &str) -> Result<&Car> {
        let car = Car::new(make, model, year, price)?;
        self.cars.push(car);
        self.persist()?;
        Ok(self.cars.last().unwrap())
    }

    /// Remove every car whose model matches (case-insensitive), persist,
    /// and return how many were removed
    ///
    /// No match is a no-op, not an error; the file is left untouched.
    pub fn remove_car(&mut self, model: &str) -> Result<usize> {
        let before = self.cars.len();
        self.cars.retain(|car| !car.matches_model(model));
        let removed = before - self.cars.len();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Flip the status on every car whose model matches (case-insensitive),
    /// persist, and return how many were flipped
    pub fn toggle_status(&mut self, model: &str) -> Result<usize> {
        let mut toggled = 0;
        for car in self.cars.iter_mut().filter(|c| c.matches_model(model)) {
            car.status = car.status.toggled();
            toggled += 1;
        }
        if toggled > 0 {
            self.persist()?;
        }
        Ok(toggled)
    }

    /// Cars satisfying every supplied filter criterion, in current order
    pub fn search(&self, filter: &SearchFilter) -> Vec<&Car> {
        self.cars.iter().filter(|car| filter.matches(car)).collect()
    }

    /// Rewrite the backing file from the in-memory list
    fn persist(&self) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = csv::Writer::from_writer(BufWriter::new(file));

        writer.write_record(HEADER)?;
        for car in &self.cars {
            writer.write_record([
                car.make.as_str(),
                car.model.as_str(),
                &car.year.to_string(),
                &car.price.to_string(),
                car.status.label(),
            ])?;
        }
        writer.flush()?;
        debug!(path = %self.file_path.display(), count = self.cars.len(), "persisted inventory");
        Ok(())
    }
}

/// Read all cars from an existing inventory file, header row excluded
fn load_cars(path: &Path) -> Result<Vec<Car>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut cars = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        // row_idx is 0-based and the header is row 1
        let row = idx + 2;
        cars.push(parse_row(&record, row)?);
    }

    Ok(cars)
}

fn parse_row(record: &csv::StringRecord, row: usize) -> Result<Car> {
    // The status column may be absent; a bare 4-field row gets the default.
    if record.len() < 4 || record.len() > 5 {
        return Err(Error::RowShape {
            row,
            found: record.len(),
        });
    }

    let make = record.get(0).unwrap_or("");
    let model = record.get(1).unwrap_or("");
    let year = record.get(2).unwrap_or("");
    let price = record.get(3).unwrap_or("");

    let mut car = Car::new(make, model, year, price).map_err(|source| Error::Row { row, source })?;
    if let Some(status) = record.get(4) {
        let status = CarStatus::from_label(status).map_err(|source| Error::Row { row, source })?;
        car = car.with_status(status);
    }

    Ok(car)
}
