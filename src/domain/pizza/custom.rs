use serde::{Deserialize, Serialize};

use crate::console::Console;

// ============================================================================
// Custom Pizza - assembled in stages, read-only once built
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPizza {
    size: String,
    crust_type: String,
    extra_cheese: bool,
    extra_meat: bool,
    extra_mushrooms: bool,
    extra_pepperoni: bool,
    extra_olives: bool,
}

impl CustomPizza {
    pub fn builder() -> CustomPizzaBuilder {
        CustomPizzaBuilder::default()
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn crust_type(&self) -> &str {
        &self.crust_type
    }

    pub fn extra_cheese(&self) -> bool {
        self.extra_cheese
    }

    pub fn extra_meat(&self) -> bool {
        self.extra_meat
    }

    pub fn extra_mushrooms(&self) -> bool {
        self.extra_mushrooms
    }

    pub fn extra_pepperoni(&self) -> bool {
        self.extra_pepperoni
    }

    pub fn extra_olives(&self) -> bool {
        self.extra_olives
    }

    pub fn display(&self, console: &Console) {
        console.say(format!("Pizza Size: {}", self.size));
        console.say(format!("Crust Type: {}", self.crust_type));
        console.say(format!("Extra Cheese: {}", yes_no(self.extra_cheese)));
        console.say(format!("Extra Meat: {}", yes_no(self.extra_meat)));
        console.say(format!("Extra Mushrooms: {}", yes_no(self.extra_mushrooms)));
        console.say(format!("Extra Pepperoni: {}", yes_no(self.extra_pepperoni)));
        console.say(format!("Extra Olives: {}", yes_no(self.extra_olives)));
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Staged configurator; extras default to off and can only be switched on
#[derive(Debug, Default)]
pub struct CustomPizzaBuilder {
    size: String,
    crust_type: String,
    extra_cheese: bool,
    extra_meat: bool,
    extra_mushrooms: bool,
    extra_pepperoni: bool,
    extra_olives: bool,
}

impl CustomPizzaBuilder {
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn crust_type(mut self, crust_type: impl Into<String>) -> Self {
        self.crust_type = crust_type.into();
        self
    }

    pub fn add_extra_cheese(mut self) -> Self {
        self.extra_cheese = true;
        self
    }

    pub fn add_extra_meat(mut self) -> Self {
        self.extra_meat = true;
        self
    }

    pub fn add_extra_mushrooms(mut self) -> Self {
        self.extra_mushrooms = true;
        self
    }

    pub fn add_extra_pepperoni(mut self) -> Self {
        self.extra_pepperoni = true;
        self
    }

    pub fn add_extra_olives(mut self) -> Self {
        self.extra_olives = true;
        self
    }

    pub fn build(self) -> CustomPizza {
        CustomPizza {
            size: self.size,
            crust_type: self.crust_type,
            extra_cheese: self.extra_cheese,
            extra_meat: self.extra_meat,
            extra_mushrooms: self.extra_mushrooms,
            extra_pepperoni: self.extra_pepperoni,
            extra_olives: self.extra_olives,
        }
    }
}
