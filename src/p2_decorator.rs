// Pattern 2: Decorator Pattern - Composable Coffee Pricing
// Demonstrates stacking immutable wrappers that extend description and cost.

use colored::Colorize;

// ============================================================================
// Example: Priced Component
// ============================================================================

trait Coffee {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        5.0
    }
}

// ============================================================================
// Example: Decorators over Box<dyn Coffee>
// ============================================================================

// Each wrapper exclusively owns the component it decorates; description and
// cost recurse into the wrapped component and append/add.

struct MilkDecorator {
    wrapped: Box<dyn Coffee>,
}

impl Coffee for MilkDecorator {
    fn description(&self) -> String {
        format!("{} + Milk", self.wrapped.description())
    }

    fn cost(&self) -> f64 {
        self.wrapped.cost() + 1.5
    }
}

struct SugarDecorator {
    wrapped: Box<dyn Coffee>,
}

impl Coffee for SugarDecorator {
    fn description(&self) -> String {
        format!("{} + Sugar", self.wrapped.description())
    }

    fn cost(&self) -> f64 {
        self.wrapped.cost() + 0.5
    }
}

fn decorator_example() {
    let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    println!("{} ${:.1}", coffee.description(), coffee.cost());

    coffee = Box::new(MilkDecorator { wrapped: coffee });
    println!("{} ${:.1}", coffee.description(), coffee.cost());

    coffee = Box::new(SugarDecorator { wrapped: coffee });
    println!("{} ${:.1}", coffee.description(), coffee.cost());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_coffee() {
        let coffee = SimpleCoffee;
        assert_eq!(coffee.description(), "Simple Coffee");
        assert_eq!(coffee.cost(), 5.0);
    }

    #[test]
    fn test_milk_wrapping() {
        let coffee = MilkDecorator {
            wrapped: Box::new(SimpleCoffee),
        };
        assert_eq!(coffee.description(), "Simple Coffee + Milk");
        assert_eq!(coffee.cost(), 6.5);
    }

    #[test]
    fn test_milk_then_sugar() {
        let coffee = SugarDecorator {
            wrapped: Box::new(MilkDecorator {
                wrapped: Box::new(SimpleCoffee),
            }),
        };
        assert_eq!(coffee.description(), "Simple Coffee + Milk + Sugar");
        assert_eq!(coffee.cost(), 7.0);
    }

    #[test]
    fn test_wrapping_order_flips_description_not_cost() {
        let coffee = MilkDecorator {
            wrapped: Box::new(SugarDecorator {
                wrapped: Box::new(SimpleCoffee),
            }),
        };
        assert_eq!(coffee.description(), "Simple Coffee + Sugar + Milk");
        assert_eq!(coffee.cost(), 7.0);
    }

    #[test]
    fn test_deep_wrapping_keeps_accumulating() {
        let coffee = SugarDecorator {
            wrapped: Box::new(MilkDecorator {
                wrapped: Box::new(MilkDecorator {
                    wrapped: Box::new(SimpleCoffee),
                }),
            }),
        };
        assert_eq!(coffee.description(), "Simple Coffee + Milk + Milk + Sugar");
        assert_eq!(coffee.cost(), 8.5);
    }
}

fn main() {
    println!("{}", "Pattern 2: Decorator Pattern".bold());
    println!("===============================\n");

    println!("=== Composable Coffee Pricing ===");
    decorator_example();
}
