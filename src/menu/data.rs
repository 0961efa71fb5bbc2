//! Hand-Authored Menu Content
//!
//! The full Sukino Cafe & Kitchen menu. This file is data, not logic: ids,
//! names, prices (whole INR), tags, and ordering are exactly as authored and
//! ordering is display-significant throughout.
//!
//! Note: all current categories happen to be sectioned; the flat layout is
//! still part of the model and exercised in tests.

use super::model::MenuTag::{NonVeg, SukinoSpecial as Special, Spicy, Veg};
use super::model::{CategoryLayout, MenuCategory, MenuItem, MenuSection, MenuTag};

fn item(id: &str, name: &str, price: u32, tags: &[MenuTag]) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        price,
        tags: tags.iter().copied().collect(),
    }
}

fn item_desc(id: &str, name: &str, description: &str, price: u32, tags: &[MenuTag]) -> MenuItem {
    MenuItem {
        description: Some(description.to_string()),
        ..item(id, name, price, tags)
    }
}

fn section(id: &str, name: &str, items: Vec<MenuItem>) -> MenuSection {
    MenuSection {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        items,
    }
}

fn category(id: &str, name: &str, description: &str, sections: Vec<MenuSection>) -> MenuCategory {
    MenuCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        layout: CategoryLayout::Sectioned { sections },
    }
}

/// The complete menu, in navigation order
pub fn categories() -> Vec<MenuCategory> {
    vec![
        breakfast(),
        small_plates(),
        taco_twist(),
        mains(),
        desserts(),
        coffee(),
        cold_brews(),
        milkshakes_more(),
        mocktails(),
    ]
}

fn breakfast() -> MenuCategory {
    category(
        "breakfast",
        "All Day Breakfast",
        "Start your day right, any time of day",
        vec![
            section(
                "waffles-pancakes",
                "Waffles & Pancakes",
                vec![
                    item("waffles", "Waffles", 235, &[Veg]),
                    item("pancakes", "Pancakes", 235, &[Veg]),
                    item("french-toast", "French Toast", 235, &[Veg]),
                    item_desc(
                        "add-ons-waffles",
                        "ADD ONS",
                        "Blueberries, Raspberries, Strawberries, Chocolate Syrup, Vanilla Icecream, Chocolate Icecream, Assorted Fruits, Extra Chicken",
                        55,
                        &[Veg],
                    ),
                ],
            ),
            section(
                "eggs-to-order",
                "Eggs to Order",
                vec![
                    item("boiled-poached-sunnyside", "Boiled/ Poached eggs/ Sunnyside up", 205, &[Veg]),
                    item("french-omelette", "French Omelette", 295, &[Veg]),
                    item("masala-omelette", "Masala Omelette", 295, &[Veg, Spicy]),
                    item("scrambled-eggs", "Scrambled Eggs", 295, &[Veg]),
                    item("mumbai-bhurji", "Mumbai Bhurji", 295, &[Veg, Spicy]),
                    item_desc("add-ons-eggs", "ADD ONS", "Cheese, Chicken, Veggies, Mushroom", 55, &[Veg]),
                ],
            ),
            section(
                "sukino-special",
                "Sukino Special",
                vec![
                    item("shakshuka", "Shakshuka", 325, &[Veg, Spicy, Special]),
                    item("avocado-toast", "Avocado Toast", 395, &[Veg, Special]),
                    item_desc("add-ons-sukino", "Add ons", "scrambled egg", 55, &[Veg]),
                ],
            ),
            section(
                "sukino-continental-veg",
                "Sukino Continental Brekkie Veg",
                vec![item_desc(
                    "continental-brekkie-veg",
                    "Sukino Continental Brekkie Veg",
                    "Bagel / cream cheese / Curried baked beans / Grilled veggies / Butter paneer Bhurji / butter",
                    375,
                    &[Veg, Special],
                )],
            ),
            section(
                "sukino-continental-nonveg",
                "Sukino Continental Brekkie Non Veg",
                vec![item_desc(
                    "continental-brekkie-nonveg",
                    "Sukino Continental Brekkie Non Veg",
                    "Bagel / grilled Sausages / Curried baked beans / Grilled veggies / Butter Masala Bhurji / butter",
                    395,
                    &[NonVeg, Special],
                )],
            ),
            section(
                "smoothie-bowls",
                "Smoothie bowls / Breakfast Bowls",
                vec![
                    item(
                        "chocolate-banana-peanut-smoothie",
                        "Chocolate, Banana and peanut butter smoothie bowl",
                        385,
                        &[Veg],
                    ),
                    item("very-berry-smoothie", "Very berry smoothie bowl", 385, &[Veg]),
                    item("tropical-smoothie", "Tropical Smoothie Bowl", 385, &[Veg]),
                ],
            ),
        ],
    )
}

fn small_plates() -> MenuCategory {
    category(
        "small-plates",
        "Small Plates",
        "Perfect for sharing or as a light meal",
        vec![
            section(
                "veg",
                "Veg",
                vec![
                    item("french-fries-salted", "French fries salted", 295, &[Veg]),
                    item("french-fries-peri-peri", "French fries peri peri", 315, &[Veg, Spicy]),
                    item("broccoli-salt-pepper", "Brocolli salt & pepper", 345, &[Veg]),
                    item("loaded-nachos", "Loaded Nachos", 325, &[Veg]),
                    item("cauliflower-65", "Cauliflower 65", 285, &[Veg, Spicy]),
                    item("pesto-grilled-paneer", "Pesto Grilled paneer", 365, &[Veg]),
                    item("kung-pao-paneer", "Kung Pao Paneer", 365, &[Veg, Spicy]),
                    item("cheese-wontons", "Cheese Wontons", 365, &[Veg]),
                    item("korean-cream-cheese-bun", "Korean Cream Cheese Bun", 285, &[Veg]),
                ],
            ),
            section(
                "salads",
                "Salads",
                vec![
                    item("classic-caesar-salad", "Classic Caesar Salad", 295, &[Veg]),
                    item("green-papaya-salad", "Green Papaya Salad", 345, &[Veg]),
                    item(
                        "crispy-asian-cabbage-salad-chicken",
                        "Crispy asian cabbage salad with chicken",
                        345,
                        &[NonVeg],
                    ),
                    item(
                        "prawn-avocado-salad",
                        "Prawn and Avocado salad with mango dressing",
                        395,
                        &[NonVeg],
                    ),
                ],
            ),
            section(
                "pan-asian-bites",
                "Pan Asian Bites",
                vec![
                    item("jhol-momo-paneer", "Jhol Momo Paneer", 385, &[Veg]),
                    item("jhol-momo-chicken", "Jhol Momo Chicken", 425, &[NonVeg]),
                    item("avocado-sushi", "Avocado Sushi 6Pcs", 495, &[Veg]),
                    item("katsu-paneer-sushi", "Katsu Paneer Sushi", 515, &[Veg]),
                    item("katsu-chicken-sushi", "Katsu Chicken Sushi", 525, &[NonVeg]),
                    item("korean-chicken-sushi", "Korean Chicken Sushi", 525, &[NonVeg]),
                ],
            ),
            section(
                "non-veg",
                "Non veg",
                vec![
                    item("prawns-salt-pepper", "Prawns salt & pepper", 425, &[NonVeg]),
                    item("chicken-65", "Chicken 65", 385, &[NonVeg, Spicy]),
                    item("chicken-karage", "Chicken Karage", 385, &[NonVeg]),
                    item("pesto-grilled-chicken", "Pesto Grilled chicken", 385, &[NonVeg]),
                    item("pesto-grilled-prawn", "Pesto Grilled prawn", 425, &[NonVeg]),
                    item("kung-pao-chicken", "Kung Pao Chicken", 385, &[NonVeg, Spicy]),
                ],
            ),
            section(
                "soups",
                "SOUPS",
                vec![
                    item("cantonese-noodle-soup-veg", "Cantonese Noodle Soup veg", 325, &[Veg]),
                    item("cantonese-noodle-soup-chicken", "Cantonese Noodle Soup chicken", 345, &[NonVeg]),
                    item("almond-broccoli-soup-veg", "Almond Brocolli Soup veg", 345, &[Veg]),
                    item("almond-broccoli-soup-chicken", "Almond Brocolli Soup chicken", 365, &[NonVeg]),
                    item("miso-soup-veg", "Misu Soup veg", 345, &[Veg]),
                    item("miso-soup-chicken", "Misu Soup chicken", 365, &[NonVeg]),
                ],
            ),
        ],
    )
}

fn taco_twist() -> MenuCategory {
    category(
        "taco-twist",
        "Taco With A Twist",
        "Soft bao buns filled with delicious fillings",
        vec![
            section(
                "tacos",
                "Tacos",
                vec![
                    item_desc(
                        "tandoori-taco",
                        "Tandoori Taco",
                        "softy pillowy bao tossed in chilli oil, filled with tandoori Paneer and crunchy lettuce topped with mint chutney",
                        285,
                        &[Veg],
                    ),
                    item_desc(
                        "crispy-paneer-taco",
                        "Crispy paneer taco",
                        "Crispy paneer golden fried and tucked into a soft bao bun, with crunchy lettuce and topped with creamy sauce",
                        295,
                        &[Veg],
                    ),
                    item_desc(
                        "tandoori-chicken-taco",
                        "Tandoori Chicken Taco",
                        "softy pillowy bao tossed in chilli oil, filled with tandoori chicken and crunchy lettuce topped with mint chutney",
                        325,
                        &[NonVeg],
                    ),
                    item_desc(
                        "crispy-chicken-taco",
                        "Crispy Chicken taco",
                        "Crispy chicken golden fried and tucked into a soft bao bun, with crunchy lettuce and topped with creamy sauce",
                        345,
                        &[NonVeg],
                    ),
                    item_desc(
                        "add-ons-taco",
                        "ADD ONS",
                        "Fried egg / Cottage cheese / Chicken / Prawns",
                        55,
                        &[Veg],
                    ),
                ],
            ),
            section(
                "sourdough-sandwich",
                "SOURDOUGH SANDWICH",
                vec![
                    item("sourdough-grilled-paneer", "Sourdough Grilled Paneer Sandwich", 345, &[Veg]),
                    item(
                        "sourdough-smoked-chicken-egg",
                        "Sourdough Smoked Chicken & egg sandwich",
                        385,
                        &[NonVeg],
                    ),
                ],
            ),
            section(
                "burgers",
                "BURGERS",
                vec![
                    item("crispy-fried-mushroom-burger", "Crispy Fried Mushroom Burger", 345, &[Veg]),
                    item("korean-fried-chicken-burger", "Korean Fried Chicken Burger", 385, &[NonVeg]),
                ],
            ),
        ],
    )
}

fn mains() -> MenuCategory {
    category(
        "mains",
        "Mains",
        "Hearty main courses to satisfy your appetite",
        vec![
            section(
                "rice-bowls",
                "RICE BOWLS",
                vec![
                    item("thai-green-curry-veg", "Thai Green Curry veg", 395, &[Veg]),
                    item("thai-green-curry-chicken", "Thai Green Curry chicken", 425, &[NonVeg]),
                    item("thai-green-curry-prawns", "Thai Green Curry prawns", 455, &[NonVeg]),
                    item("nasi-goreng-chicken", "Nasi Goreng chicken", 425, &[NonVeg]),
                    item("nasi-goreng-prawn", "Nasi Goreng prawn", 455, &[NonVeg]),
                    item("mexican-burrito-bowl-veg", "Mexican Burrito Bowl veg", 385, &[Veg]),
                    item("mexican-burrito-bowl-chicken", "Mexican Burrito Bowl chicken", 415, &[NonVeg]),
                    item("kimchi-fried-rice-veg", "Kimchi Fried Rice veg", 395, &[Veg]),
                    item("kimchi-fried-rice-chicken", "Kimchi Fried Rice chicken", 425, &[NonVeg]),
                    item("kimchi-fried-rice-prawn", "Kimchi Fried Rice prawn", 455, &[NonVeg]),
                    item_desc("add-ons-rice", "ADD ONS", "Veggies / Chicken / Prawns", 55, &[Veg]),
                ],
            ),
            section(
                "noodle-bowl",
                "NOODLE BOWL",
                vec![
                    item("mi-goreng-veg", "MI Goreng veg", 385, &[Veg]),
                    item("mi-goreng-chicken", "MI Goreng chicken", 415, &[NonVeg]),
                    item("mi-goreng-prawn", "MI Goreng prawn", 435, &[NonVeg]),
                    item("pan-fried-noodle-veg", "Pan Fried Noodle veg", 385, &[Veg]),
                    item("pan-fried-noodle-chicken", "Pan Fried Noodle chicken", 425, &[NonVeg]),
                    item("pad-thai-noodle-veg", "Pad Thai Noodle veg", 465, &[Veg]),
                    item("pad-thai-noodle-chicken", "Pad Thai Noodle chicken", 485, &[NonVeg]),
                    item("singapore-noodle-veg", "Singapore Noodle veg", 465, &[Veg]),
                    item("singapore-noodle-chicken", "Singapore Noodle chicken", 485, &[NonVeg]),
                    item_desc(
                        "add-ons-noodle",
                        "ADD ONS",
                        "Fried egg / Cottage cheese / Chicken / Prawns",
                        55,
                        &[Veg],
                    ),
                ],
            ),
            section(
                "pastas",
                "Pastas",
                vec![
                    item("pesto-pasta-veg", "Pesto Pasta veg", 395, &[Veg]),
                    item("pesto-pasta-chicken", "Pesto Pasta chicken", 425, &[NonVeg]),
                    item("pesto-pasta-prawns", "Pesto Pasta prawns", 455, &[NonVeg]),
                    item("aglio-e-olio-veg", "Aglio E olio veg", 395, &[Veg]),
                    item("aglio-e-olio-chicken", "Aglio E olio chicken", 425, &[NonVeg]),
                    item("aglio-e-olio-prawn", "Aglio E olio prawn", 455, &[NonVeg]),
                    item_desc(
                        "arrabiata-sauce-pasta",
                        "Arrabiata sauce Pasta",
                        "Spicy tangy tomato sauce with a hint of basil and parmasene cheese",
                        395,
                        &[Veg, Spicy],
                    ),
                    item_desc(
                        "alfredo-sauce-pasta",
                        "Alfredo sauce pasta",
                        "Creamy white sauce with a hint of truffle",
                        395,
                        &[Veg],
                    ),
                    item_desc("add-ons-pasta", "ADD ONS", "Veggies / Chicken / Prawns", 55, &[Veg]),
                ],
            ),
            section(
                "pizzas",
                "Pizzas 10'in (Californian/Thin crust)",
                vec![
                    item_desc(
                        "margherita",
                        "Margherita",
                        "Fresh tomatoes, mozzarella, basil, olive oil",
                        385,
                        &[Veg],
                    ),
                    item_desc(
                        "toscana",
                        "Toscana",
                        "Roasted red pepper, olives, red onions, sun dried tomatoes, basil",
                        425,
                        &[Veg],
                    ),
                    item_desc(
                        "pesto-paneer-pizza",
                        "Pesto Paneer Pizza",
                        "paneer marinated in pesto sauce.. with fresh bell peppers with generous layer of mozzarella",
                        465,
                        &[Veg],
                    ),
                    item_desc(
                        "chicken-cheese-69",
                        "Chicken and cheese 69",
                        "Indian style chicken with Mozarella cheese and fried curry leaves",
                        485,
                        &[NonVeg],
                    ),
                    item_desc(
                        "chicken-pepperoni",
                        "Chicken Pepperoni",
                        "A classic fav with loaded pepporoni slices, rich tomato sauce with gooey mozarella",
                        495,
                        &[NonVeg],
                    ),
                    item_desc(
                        "add-ons-pizza",
                        "ADD ONS",
                        "Fried egg / Cottage cheese / Chicken / Prawns",
                        55,
                        &[Veg],
                    ),
                ],
            ),
            section(
                "classic-steak",
                "Classic Steak",
                vec![
                    item_desc(
                        "tandoori-paneer-steak",
                        "Tandoori Paneer Steak",
                        "fresh paneer marinated in tandoori sauce served with mashed potato and sauted vegetables alongside of herbed rice",
                        385,
                        &[Veg],
                    ),
                    item_desc(
                        "classic-chicken-steak",
                        "Classic chicken steak",
                        "succulent chicken breast with pepper sauce served with mashed potato and sauted vegetables alongside of herbed rice",
                        435,
                        &[NonVeg],
                    ),
                    item_desc(
                        "grilled-fish-steak",
                        "Grilled Fish Steak",
                        "Fish fillet marinated in butter lemon sauce and grilled to perfection, served alongside of mashed potato ,sauted vegetables and herbed rice",
                        495,
                        &[NonVeg],
                    ),
                ],
            ),
        ],
    )
}

fn desserts() -> MenuCategory {
    category(
        "desserts",
        "Desserts & Sweets",
        "Indulgent treats to end your meal",
        vec![
            section(
                "house-specials",
                "House Specials",
                vec![
                    item_desc(
                        "raspberry-buttercream-eclair",
                        "Raspberry Buttercream eclair",
                        "Airy choux eclair filled with raspberry butter frosting and topped with fresh raspberry",
                        285,
                        &[Veg, Special],
                    ),
                    item_desc(
                        "classic-tiramisu",
                        "CLASSIC Tiramisu",
                        "Soft lady biscuit with infused coffee, soft whipped mascarpone cheese",
                        385,
                        &[Veg, Special],
                    ),
                    item_desc(
                        "hazelnut-choco-mousse",
                        "Hazelnut Choco Mousse",
                        "A rich velvety choco mousse layered with roasted hazelnut crunch for the perfect nutty indulgence",
                        395,
                        &[Veg, Special],
                    ),
                ],
            ),
            section(
                "sukino-favs",
                "Sukino Favs",
                vec![
                    item_desc(
                        "basque-cheesecake",
                        "Basque Cheesecake",
                        "Creamy Crustless delight with caramelised top, baked to perfection",
                        395,
                        &[Veg, Special],
                    ),
                    item_desc(
                        "tres-leches",
                        "tres leches",
                        "Apricot infused condensed milk poured on top of Soft vanilla sponge and berries",
                        385,
                        &[Veg],
                    ),
                    item_desc(
                        "belgian-chocolate-mousse",
                        "Belgian Chocolate Mousse",
                        "Hazelnut ganache, Moist cocoa genoise sponge, praline and milk chocolate cream",
                        395,
                        &[Veg, Special],
                    ),
                ],
            ),
            section(
                "off-the-shelf",
                "Off the shelf",
                vec![
                    item("carrot-cake", "Carrot cake", 245, &[Veg]),
                    item("caramel-walnut-brownies", "caramel and Walnut Brownies", 245, &[Veg]),
                    item("classic-fudgy-brownie", "Classic Fudgy Brownie", 195, &[Veg]),
                    item("blueberry-muffins", "Blueberry Muffins", 195, &[Veg]),
                    item("french-vanilla-muffins", "French Vanilla Muffins", 149, &[Veg]),
                    item("chocolate-chip-cookies", "Chocolate chip cookies", 69, &[Veg]),
                    item("butter-croissant", "Butter croissant", 215, &[Veg]),
                    item("classic-cinnamon-roll", "Classic cinnamon roll", 215, &[Veg]),
                    item("pain-au-chocolat", "Pain Au Chocolat", 245, &[Veg, Special]),
                ],
            ),
        ],
    )
}

fn coffee() -> MenuCategory {
    category(
        "coffee",
        "Coffee",
        "Carefully sourced beans, expertly brewed",
        vec![
            section(
                "coffee-iced-up",
                "COFFEE ICED UP",
                vec![
                    item("ice-lattee", "ICE LATTEE", 275, &[Veg]),
                    item_desc("ice-lattee-flavors", "[HAZELNUT/VANILLA]", "Add-on flavors", 55, &[Veg]),
                    item("ice-cappuccino", "ICE CAPPUCCINO", 275, &[Veg]),
                    item_desc("ice-cappuccino-flavors", "[HAZELNUT/VANILLA]", "Add-on flavors", 55, &[Veg]),
                    item("mint-iced-coffee", "MINT ICED COFFEE", 275, &[Veg]),
                    item("date-me-iced-coffee", "DATE ME ICED COFFEE", 275, &[Veg]),
                ],
            ),
            section(
                "hot-coffee",
                "HOT COFFEEE...",
                vec![
                    item("espresso", "ESPRESSO", 180, &[Veg]),
                    item("americano", "AMERICANO", 195, &[Veg]),
                    item_desc("latte", "LATTE", "[HAZELNUT/VANILLA/IRISH/BISCOFF]: 55", 285, &[Veg, Special]),
                    item("flat-white", "FLAT WHITE", 265, &[Veg, Special]),
                    item("cafe-mocha", "CAFE MOCHA", 285, &[Veg]),
                    item("date-me", "DATE ME", 285, &[Veg, Special]),
                    item_desc(
                        "cappuccino",
                        "CAPPUCCINO",
                        "[HAZELNUT/VANILLA/IRISH/BISCOFF]: 55",
                        285,
                        &[Veg],
                    ),
                    item("cortado", "CORTADO", 195, &[Veg, Special]),
                    item("irish-coffee", "IRISH COFFEE", 245, &[Veg]),
                ],
            ),
            section(
                "frappee",
                "FRAPPEEE",
                vec![
                    item("sukino-cold-coffee", "SUKINO COLD COFFEE", 325, &[Veg]),
                    item("mocha-frappee", "MOCHA FRAPPEE", 325, &[Veg]),
                    item("classic-frappe", "CLASSIC FRAPPE", 325, &[Veg]),
                    item("salted-caramel-frappee", "SALTED CARAMEL FRAPPEE", 325, &[Veg]),
                    item("jonsnow-frappee", "JONSNOW FRAPPEE", 325, &[Veg]),
                    item("nutella-frappee", "NUTELLA FRAPPEE", 325, &[Veg]),
                    item("blueberry-cheesecake-frappe", "BLUEBERRY CHEESECAKE FRAPPE", 325, &[Veg]),
                ],
            ),
        ],
    )
}

fn cold_brews() -> MenuCategory {
    category(
        "cold-brews",
        "Classic Cold Brews",
        "Refreshing cold brews and artisanal teas",
        vec![
            section(
                "classic-cold-brews",
                "CLASSIC COLD BREWS",
                vec![
                    item("classic-cold-brew", "CLASSIC COLD BREW", 249, &[Veg]),
                    item("vietnamese-cold-brew", "VIETNAMESE COLD BREW", 249, &[Veg]),
                    item("pistachio-cream-iced", "PISTACHIO CREAM ICED", 249, &[Veg]),
                    item("lime-cranberry-cold-brew", "LIME & CRANBERRY COLD BREW", 249, &[Veg]),
                    item("strawberry-cream-cold-brew", "STRAWBERRY & CREAM COLD BREW", 249, &[Veg]),
                    item("banana-cream-cold-brew", "BANANA & CREAM COLD BREW", 249, &[Veg]),
                    item("haiten-mocha-cold-brew", "HAITEN MOCHA COLD BREW", 249, &[Veg]),
                ],
            ),
            section(
                "coffee-around-world",
                "COFFEEE AROUND THE WORLD",
                vec![
                    item("macchiato", "MACCHIATO", 195, &[Veg, Special]),
                    item("affogatto", "AFFOGATTO", 285, &[Veg, Special]),
                    item("coffee-bom-bon", "COFFEE BOM BON", 180, &[Veg, Special]),
                ],
            ),
            section(
                "artisanal-teas",
                "ARTISANAL TEA'S",
                vec![
                    item("chamomile-mint-tea", "CHAMOMILE AND MINT TEA", 249, &[Veg]),
                    item("hibiscus-spice", "HIBISCUS AND SPICE", 249, &[Veg]),
                    item("bluepea-mint", "BLUEPEA AND MINT", 249, &[Veg]),
                    item("assam-tea", "ASSAM TEA", 249, &[Veg]),
                ],
            ),
            section(
                "ice-tea",
                "ICE TEA",
                vec![
                    item("elderflower-basil-ice-tea", "ELDERFLOWER BASIL ICE TEA", 245, &[Veg]),
                    item("peach-ice-tea", "PEACH ICE TEA", 245, &[Veg, Special]),
                ],
            ),
        ],
    )
}

fn milkshakes_more() -> MenuCategory {
    category(
        "milkshakes-more",
        "Milkshakes N More",
        "Creamy milkshakes, matcha, and refreshing beverages",
        vec![
            section(
                "milkshakes",
                "MILKSHAKES",
                vec![
                    item("nutella-brownie", "NUTELLA BROWNIE", 325, &[Veg]),
                    item("strawberry-cream-milkshake", "STRAWBERRY CREAM MILKSHAKE", 325, &[Veg]),
                    item("biscoff-cream-milkshake", "BISCOFF CREAM MILKSHAKE", 325, &[Veg]),
                ],
            ),
            section(
                "matchaa",
                "MATCHAA",
                vec![
                    item("classic-hot-matcha", "CLASSIC HOT MATCHA", 325, &[Veg, Special]),
                    item("classic-iced-matcha", "CLASSIC ICED MATCHA", 325, &[Veg, Special]),
                    item("strawberry-matcha", "STRAWBERRY MATCHA", 365, &[Veg]),
                    item("mango-matcha", "MANGO MATCHA", 365, &[Veg, Special]),
                ],
            ),
            section(
                "mojito",
                "MOJITO",
                vec![
                    item("virgin-mojito", "VIRGIN MOJITO", 245, &[Veg]),
                    item("orange-mojito", "ORANGE MOJITO", 245, &[Veg]),
                    item("strawberry-mojito", "STRAWBERRY MOJITO", 245, &[Veg]),
                ],
            ),
            section(
                "kombucha-soda",
                "KOMBUCHA & SODA",
                vec![
                    item("pineapple-basil-kombucha", "Pineapple & Basil kombucha", 215, &[Veg]),
                    item("mango-chilli-kombucha", "Mango & Chillii kombucha", 215, &[Veg]),
                    item("imli-pop-soda", "Imli pop Soda", 215, &[Veg, Special]),
                    item("passion-fruit-punch", "Passion fruit Punch", 215, &[Veg]),
                    item("ginger-ale-kaffir-lime", "Ginger Ale Kaffir Lime", 215, &[Veg]),
                ],
            ),
        ],
    )
}

fn mocktails() -> MenuCategory {
    category(
        "mocktails",
        "Mocktails",
        "Refreshing non-alcoholic beverages",
        vec![
            section(
                "sukino-favs-mocktails",
                "SUKINO FAV'S",
                vec![
                    item("elder-lychee-fizz", "ELDER LYCHEE FIZZ", 275, &[Veg, Special]),
                    item("french-kiss", "FRENCH KISS", 275, &[Veg, Special]),
                    item("citrus-rose-martini", "CITRUS ROSE MARTINI", 275, &[Veg, Special]),
                    item("flower-sour", "FLOWER SOUR", 275, &[Veg, Special]),
                    item("autumn-sparkler", "AUTUMN SPARKLER", 275, &[Veg, Special]),
                ],
            ),
            section(
                "hot-chocolate",
                "HOT CHOCOLATE",
                vec![
                    item("classic-hot-chocolate", "CLASSIC", 295, &[Veg]),
                    item("vanilla-hot-chocolate", "VANILLA", 325, &[Veg]),
                    item("hazelnut-hot-chocolate", "HAZELNUT", 345, &[Veg]),
                ],
            ),
            section(
                "classics",
                "CLASSICS",
                vec![
                    item("coke", "COKE", 99, &[Veg]),
                    item("tonic-water", "TONIC WATER", 99, &[Veg]),
                    item("ginger-ale", "GINGER ALE", 99, &[Veg]),
                    item("cranberry-juice", "CRANBERRY JUICE", 99, &[Veg]),
                    item("orange-juice", "ORANGE JUICE", 99, &[Veg]),
                    item("soda", "SODA", 99, &[Veg]),
                    item("packaged-water", "PACKAGED WATER", 99, &[Veg]),
                ],
            ),
        ],
    )
}
