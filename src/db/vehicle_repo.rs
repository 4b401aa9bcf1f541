// src/db/vehicle_repo.rs

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::models::vehicle::{TransmissionType, Vehicle};

// Catálogo em memória. Carregado uma vez na subida e nunca alterado,
// por isso o `Arc<Vec<_>>` sem lock.
#[derive(Clone)]
pub struct VehicleRepository {
    vehicles: Arc<Vec<Vehicle>>,
}

impl VehicleRepository {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles: Arc::new(vehicles) }
    }

    // Catálogo inicial da loja
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    pub fn all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }
}

fn vehicle(
    id: &str,
    marca: &str,
    modelo: &str,
    ano: i32,
    preco: i64,
    image_text: &str,
    quilometragem: u32,
    cambio: TransmissionType,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        modelo: modelo.to_string(),
        marca: marca.to_string(),
        ano,
        preco: Decimal::from(preco),
        imagem_principal: format!("https://via.placeholder.com/300x169?text={}", image_text),
        quilometragem: Some(quilometragem),
        cambio: Some(cambio),
    }
}

fn seed_catalog() -> Vec<Vehicle> {
    use TransmissionType::{Automatico, Cvt, Manual};

    vec![
        vehicle("1", "Honda", "Civic", 2023, 145000, "Honda+Civic+2023", 5000, Automatico),
        vehicle("2", "Toyota", "Corolla", 2022, 135000, "Toyota+Corolla+2022", 15000, Cvt),
        vehicle("3", "Chevrolet", "Onix", 2023, 85000, "Chevrolet+Onix+2023", 2000, Manual),
        vehicle("4", "Hyundai", "HB20", 2021, 72000, "Hyundai+HB20+2021", 35000, Manual),
        vehicle("5", "Jeep", "Compass", 2023, 185000, "Jeep+Compass+2023", 8000, Automatico),
        vehicle("6", "Volkswagen", "Gol", 2020, 58000, "VW+Gol+2020", 45000, Manual),
        vehicle("7", "Volkswagen", "T-Cross", 2023, 125000, "VW+T-Cross+2023", 3000, Automatico),
        vehicle("8", "Nissan", "Kicks", 2022, 98000, "Nissan+Kicks+2022", 18000, Cvt),
        vehicle("9", "Fiat", "Argo", 2023, 78000, "Fiat+Argo+2023", 1500, Manual),
        vehicle("10", "Hyundai", "Creta", 2023, 115000, "Hyundai+Creta+2023", 6000, Automatico),
        vehicle("11", "Honda", "Fit", 2021, 82000, "Honda+Fit+2021", 28000, Cvt),
        vehicle("12", "Jeep", "Renegade", 2022, 135000, "Jeep+Renegade+2022", 12000, Automatico),
        vehicle("13", "Volkswagen", "Polo", 2023, 95000, "VW+Polo+2023", 4000, Automatico),
        vehicle("14", "Chevrolet", "Tracker", 2023, 128000, "Chevrolet+Tracker+2023", 7000, Automatico),
        vehicle("15", "Toyota", "Yaris", 2022, 92000, "Toyota+Yaris+2022", 22000, Cvt),
    ]
}
