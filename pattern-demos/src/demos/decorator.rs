use std::rc::Rc;

use common::console::Console;
use structural::decorator::{Beverage, BeverageExt, Condiment, Espresso, HouseBlend};

pub fn run(console: Rc<dyn Console>) {
    let espresso = Espresso;
    console.print_line("Client: I've got an Espresso component:");
    console.print_line(&format!("Description: {}", espresso.description()));
    console.print_line(&format!("Size: {}", espresso.size()));
    console.print_line(&format!("Cost: {:.2}", espresso.cost()));
    console.print_line("");

    let mocha_house_blend_soy = HouseBlend.with(Condiment::Mocha).with(Condiment::Soy);
    console.print_line("Client: Now I've got a decorated component:");
    console.print_line(&format!(
        "Description: {}",
        mocha_house_blend_soy.description()
    ));
    console.print_line(&format!("Cost: {:.2}", mocha_house_blend_soy.cost()));
}
