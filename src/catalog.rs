//! Static catalog data: the featured cakes and the customization options.

use std::fmt;
use std::str::FromStr;

use crate::Price;
use crate::model::{CakeOption, CatalogCake, Category};

pub static FEATURED_CAKES: [CatalogCake; 4] = [
    CatalogCake {
        id: "1",
        name: "Classic Chocolate",
        description: "Rich chocolate layers with smooth ganache and fresh berries",
        price: Price::from_whole(45),
        image: "https://images.unsplash.com/photo-1578985545062-69928b1d9587?auto=format&fit=crop&w=800&q=80",
        category: Category::Signature,
    },
    CatalogCake {
        id: "2",
        name: "Strawberry Dream",
        description: "Light vanilla sponge with fresh strawberries and cream",
        price: Price::from_whole(40),
        image: "https://images.unsplash.com/photo-1565958011703-44f9829ba187?auto=format&fit=crop&w=800&q=80",
        category: Category::Seasonal,
    },
    CatalogCake {
        id: "3",
        name: "Caramel Delight",
        description: "Butterscotch cake layers with salted caramel buttercream",
        price: Price::from_whole(48),
        image: "https://images.unsplash.com/photo-1535141192574-5d4897c12636?auto=format&fit=crop&w=800&q=80",
        category: Category::Signature,
    },
    CatalogCake {
        id: "4",
        name: "Berry Bliss",
        description: "Mixed berry compote between light chiffon cake layers",
        price: Price::from_whole(42),
        image: "https://images.unsplash.com/photo-1464349095431-e9a21285b5f3?auto=format&fit=crop&w=800&q=80",
        category: Category::Seasonal,
    },
];

pub static BASES: [CakeOption; 3] = [
    CakeOption {
        id: "chocolate",
        name: "Chocolate",
        price: Price::from_whole(15),
    },
    CakeOption {
        id: "vanilla",
        name: "Vanilla",
        price: Price::from_whole(12),
    },
    CakeOption {
        id: "red-velvet",
        name: "Red Velvet",
        price: Price::from_whole(18),
    },
];

pub static FILLINGS: [CakeOption; 3] = [
    CakeOption {
        id: "cream",
        name: "Whipped Cream",
        price: Price::from_whole(5),
    },
    CakeOption {
        id: "chocolate",
        name: "Chocolate Ganache",
        price: Price::from_whole(7),
    },
    CakeOption {
        id: "fruit",
        name: "Fresh Berries",
        price: Price::from_whole(8),
    },
];

pub static TOPPINGS: [CakeOption; 3] = [
    CakeOption {
        id: "sprinkles",
        name: "Rainbow Sprinkles",
        price: Price::from_whole(3),
    },
    CakeOption {
        id: "chocolate",
        name: "Chocolate Shavings",
        price: Price::from_whole(4),
    },
    CakeOption {
        id: "fruit",
        name: "Fresh Fruit",
        price: Price::from_whole(6),
    },
];

/// One of the three independent customization categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Base,
    Filling,
    Topping,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Base, Layer::Filling, Layer::Topping];
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layer::Base => "base",
            Layer::Filling => "filling",
            Layer::Topping => "topping",
        };
        f.write_str(name)
    }
}

impl FromStr for Layer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Layer::Base),
            "filling" => Ok(Layer::Filling),
            "topping" => Ok(Layer::Topping),
            other => Err(other.to_string()),
        }
    }
}

pub fn find_cake(id: &str) -> Option<&'static CatalogCake> {
    FEATURED_CAKES.iter().find(|cake| cake.id == id)
}

pub fn options(layer: Layer) -> &'static [CakeOption] {
    match layer {
        Layer::Base => &BASES,
        Layer::Filling => &FILLINGS,
        Layer::Topping => &TOPPINGS,
    }
}

/// Option ids are only unique within their layer ("chocolate" exists in all three).
pub fn find_option(layer: Layer, id: &str) -> Option<&'static CakeOption> {
    options(layer).iter().find(|option| option.id == id)
}
