//! Gender-indexed character names, country names, settlement names, and a
//! reserved pool of dragon names (§6).

use crate::world::Gender;

pub fn character_names(gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Male => &[
            "Aldric", "Bram", "Cedric", "Dorian", "Edmund", "Fenwick", "Godric", "Harold",
            "Ivor", "Joran", "Kendric", "Leofric", "Magnus", "Nolan", "Osric", "Percival",
            "Quentin", "Roland", "Stefan", "Thane", "Ulric", "Viggo", "Wystan",
        ],
        Gender::Female => &[
            "Adela", "Brynn", "Ceridwen", "Diana", "Elswyth", "Freya", "Gwendolyn", "Hilda",
            "Isolde", "Joslyn", "Katrin", "Linnea", "Maeve", "Nerys", "Orla", "Petra",
            "Rowena", "Sybil", "Talia", "Una", "Vesna", "Wynne", "Ysolde",
        ],
    }
}

pub fn country_names() -> &'static [&'static str] {
    &[
        "Aldenmark", "Brightholme", "Caldera", "Drakenfell", "Eastmere", "Fallowmoor",
        "Greywatch", "Havensreach", "Ironhold", "Juniper Vale", "Kestrel March",
        "Lowveil", "Marrowick", "Northgale", "Oakenshire", "Pellmoor", "Quarryhaven",
        "Redmont", "Stonefen", "Thornwick", "Underholt", "Valdoria", "Westmark",
    ]
}

pub fn settlement_name_parts() -> (&'static [&'static str], &'static [&'static str]) {
    let prefixes = &[
        "Oak", "River", "Stone", "Black", "White", "Elder", "Wolf", "Raven", "Iron",
        "Thorn", "Mill", "Salt", "Green", "Red", "High", "Low", "North", "South",
    ];
    let suffixes = &[
        "ford", "haven", "hold", "wick", "ton", "burg", "field", "dale", "moor",
        "crest", "watch", "fall", "reach", "mere", "stead",
    ];
    (prefixes, suffixes)
}

pub fn dragon_names() -> &'static [&'static str] {
    &[
        "Pyraxes", "Vermithrax", "Ashgorath", "Cinderwing", "Obsidianth", "Scaldara",
        "Fellmaw", "Duskember", "Emberclaw", "Glowcinder",
    ]
}
