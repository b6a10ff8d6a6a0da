use clowder::cafe::{Cat, CatCafe};
use clowder::Error;

fn main() -> Result<(), Error> {
    let mut cafe = CatCafe::new();

    cafe.add_cat(Cat::new("Miss Chief Sooky", 2));
    cafe.add_cat(Cat::new("Gwenapurr Esmeralda", 3));
    cafe.add_cat(Cat::new("Morticia", 3));
    cafe.add_cat(Cat::new("Fitzby Darnsworth", 5));

    println!("{} cats are purring.", cafe.cat_count());
    let names = cafe.cats().map(Cat::name).collect::<Vec<_>>();
    println!("Lightest first: {}", names.join(", "));

    if let Some(cat) = cafe.cat_by_weight(3, 4)? {
        println!("Weight [3, 4): {:?}", cat);
    }

    for name in ["Morticia", "Miss Chief Sooky"] {
        match cafe.cat_by_name(name) {
            Some(cat) => println!("Name '{}': {:?}", name, cat),
            None => println!("Name '{}': not here", name),
        }
    }

    Ok(())
}
