// Pattern 3: Observer Pattern - Weather Station Notifications
// Demonstrates a subject notifying registered observers synchronously,
// in registration order.

use colored::Colorize;
use std::sync::{Arc, Mutex};

// ============================================================================
// Example: Observers
// ============================================================================

trait WeatherObserver {
    fn update(&mut self, temperature: f32);
}

struct CurrentConditionsDisplay;

impl WeatherObserver for CurrentConditionsDisplay {
    fn update(&mut self, temperature: f32) {
        println!("Current conditions: {:.1}F degrees", temperature);
    }
}

struct StatisticsDisplay {
    max_temp: f32,
    min_temp: f32,
    temp_sum: f32,
    num_readings: u32,
}

impl StatisticsDisplay {
    fn new() -> Self {
        // Sentinel bounds assume readings stay inside (0, 200)
        Self {
            max_temp: 0.0,
            min_temp: 200.0,
            temp_sum: 0.0,
            num_readings: 0,
        }
    }

    fn display(&self) {
        println!(
            "Avg/Max/Min temperature = {:.1}/{:.1}/{:.1}",
            self.temp_sum / self.num_readings as f32,
            self.max_temp,
            self.min_temp
        );
    }
}

impl WeatherObserver for StatisticsDisplay {
    fn update(&mut self, temperature: f32) {
        self.temp_sum += temperature;
        self.num_readings += 1;
        if temperature > self.max_temp {
            self.max_temp = temperature;
        }
        if temperature < self.min_temp {
            self.min_temp = temperature;
        }
        self.display();
    }
}

// ============================================================================
// Example: Weather Station Subject
// ============================================================================

struct WeatherStation {
    temperature: f32,
    observers: Vec<Arc<Mutex<dyn WeatherObserver + Send>>>,
}

impl WeatherStation {
    fn new() -> Self {
        Self {
            temperature: 0.0,
            observers: Vec::new(),
        }
    }

    fn register_observer(&mut self, observer: Arc<Mutex<dyn WeatherObserver + Send>>) {
        self.observers.push(observer);
    }

    fn remove_observer(&mut self, observer: &Arc<Mutex<dyn WeatherObserver + Send>>) {
        self.observers.retain(|o| !Arc::ptr_eq(o, observer));
    }

    fn set_temperature(&mut self, temperature: f32) {
        self.temperature = temperature;
        self.notify_observers();
    }

    fn notify_observers(&self) {
        for observer in &self.observers {
            observer.lock().unwrap().update(self.temperature);
        }
    }
}

fn observer_example() {
    let mut station = WeatherStation::new();

    let current_display: Arc<Mutex<dyn WeatherObserver + Send>> =
        Arc::new(Mutex::new(CurrentConditionsDisplay));
    let statistics_display: Arc<Mutex<dyn WeatherObserver + Send>> =
        Arc::new(Mutex::new(StatisticsDisplay::new()));

    station.register_observer(current_display);
    station.register_observer(statistics_display);

    station.set_temperature(80.0);
    station.set_temperature(82.0);
    station.set_temperature(78.0);
}

fn removal_example() {
    let mut station = WeatherStation::new();

    let current_display: Arc<Mutex<dyn WeatherObserver + Send>> =
        Arc::new(Mutex::new(CurrentConditionsDisplay));
    let statistics_display: Arc<Mutex<dyn WeatherObserver + Send>> =
        Arc::new(Mutex::new(StatisticsDisplay::new()));

    station.register_observer(current_display.clone());
    station.register_observer(statistics_display);

    station.set_temperature(80.0);

    // Removal takes effect before the next notification round
    station.remove_observer(&current_display);
    station.set_temperature(84.0);
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("{}", "Pattern 3: Observer Pattern".bold());
    println!("===============================\n");

    println!("=== Weather Station Notifications ===");
    observer_example();
    println!();

    println!("=== Removing an Observer ===");
    removal_example();
}
