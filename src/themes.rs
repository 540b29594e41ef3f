use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::HashMap;

/// Closed set of selectable themes. `Random` is the no-theme marker: it
/// carries no characters and routes generation to the word pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Random,
    Lotr,
    StarWars,
    Marvel,
    Wow,
    Slavic,
    Witcher,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::Random,
        Theme::Lotr,
        Theme::StarWars,
        Theme::Marvel,
        Theme::Wow,
        Theme::Slavic,
        Theme::Witcher,
    ];

    pub fn parse(s: &str) -> Option<Theme> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Some(Theme::Random),
            "lotr" => Some(Theme::Lotr),
            "starwars" => Some(Theme::StarWars),
            "marvel" => Some(Theme::Marvel),
            "wow" => Some(Theme::Wow),
            "slavic" => Some(Theme::Slavic),
            "witcher" => Some(Theme::Witcher),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Theme::Random => "random",
            Theme::Lotr => "lotr",
            Theme::StarWars => "starwars",
            Theme::Marvel => "marvel",
            Theme::Wow => "wow",
            Theme::Slavic => "slavic",
            Theme::Witcher => "witcher",
        }
    }
}

pub struct ThemeData {
    pub name: &'static str,
    pub characters: &'static [&'static str],
}

const LOTR: &[&str] = &[
    "Frodo", "Samwise", "Gandalf", "Aragorn", "Legolas", "Gimli", "Boromir", "Faramir", "Merry",
    "Pippin", "Bilbo", "Gollum", "Smeagol", "Galadriel", "Elrond", "Arwen", "Celeborn", "Eowyn",
    "Eomer", "Theoden", "Denethor", "Saruman", "Sauron", "Treebeard", "Glorfindel", "Thranduil",
    "Radagast", "Grima", "Isildur", "Elendil", "GilGalad", "Imrahil", "Haldir", "Shadowfax",
    "Thorin", "Balin", "Dwalin", "Beregond", "Eorl", "Shelob",
];

const STAR_WARS: &[&str] = &[
    "Luke", "Leia", "Han", "Chewbacca", "R2D2", "C3PO", "ObiWan", "Anakin", "Yoda", "DarthVader",
    "Palpatine", "DarthMaul", "Ahsoka", "Rex", "Cody", "MaceWindu", "QuiGon", "Padme", "Jango",
    "Boba", "Kylo", "Rey", "Finn", "Poe", "BB8", "Lando", "Mando", "Grogu", "Ezra", "Kanan",
    "Hera", "Sabine", "Zeb", "Thrawn", "Tarkin", "Krennic", "Grievous", "Dooku", "Ventress",
    "CadBane", "Fennec", "Cara", "BoKatan", "DinDjarin",
];

const MARVEL: &[&str] = &[
    "IronMan", "CaptainAmerica", "Thor", "Hulk", "BlackWidow", "Hawkeye", "SpiderMan",
    "BlackPanther", "DoctorStrange", "ScarletWitch", "Vision", "Falcon", "WinterSoldier",
    "AntMan", "Wasp", "CaptainMarvel", "StarLord", "Gamora", "Drax", "Rocket", "Groot", "Mantis",
    "Nebula", "Loki", "Thanos", "Ultron", "RedSkull", "Magneto", "Wolverine", "Storm", "Cyclops",
    "JeanGrey", "Nightcrawler", "Colossus", "Deadpool", "Cable", "Domino", "Daredevil",
    "Punisher", "JessicaJones", "LukeCage", "IronFist",
];

const WOW: &[&str] = &[
    "Arthas", "Jaina", "Uther", "Sylvanas", "Thrall", "Garrosh", "Varian", "Anduin", "Genn",
    "Tyrande", "Malfurion", "Illidan", "Maiev", "Kaelthas", "Khadgar", "Medivh", "Guldan",
    "Grommash", "Cairne", "Voljin", "Baine", "LorThemar", "Liadrin", "Turalyon", "Alleria",
    "Vereesa", "Rhonin", "Magni", "Muradin", "Falstad", "Alexstrasza", "Ysera", "Nozdormu",
    "Malygos", "Neltharion", "Deathwing", "Onyxia", "Nefarian", "Ragnaros", "KelThuzad",
    "LichKing", "Bolvar", "Tirion", "Darion", "Mograine",
];

const SLAVIC: &[&str] = &[
    "Bogdan", "Bohdan", "Bogdanus", "Bohdanus", "Stanislav", "Stanislaw", "Stanislavus",
    "Vladimir", "Wladimir", "Vladislav", "Boris", "Borislav", "Miroslav", "Bronislav", "Jaromir",
    "Radoslav", "Radomir", "Dragomir", "Dobromir", "Kazimir", "Kazimierz", "Lech", "Mieczyslaw",
    "Przemyslaw", "Zbigniew", "Wojciech", "Leszek",
];

const WITCHER: &[&str] = &[
    "Geralt", "GeraltOfRivia", "Yennefer", "Triss", "Ciri", "Dandelion", "Jaskier", "Vesemir",
    "Eskel", "Lambert", "Coen", "Emhyr", "Calanthe", "Pavetta", "Foltest", "Eredin", "Avallach",
    "Regis", "Milva", "Angouleme", "Bonhart", "Fringilla", "Philippa", "Saskia", "Roach",
    "GaunterODimm",
];

lazy_static! {
    /// Theme catalog: display name plus character pool per theme.
    pub static ref THEMES: HashMap<Theme, ThemeData> = {
        let mut catalog = HashMap::new();
        catalog.insert(Theme::Random, ThemeData { name: "Random", characters: &[] });
        catalog.insert(Theme::Lotr, ThemeData { name: "Lord of the Rings", characters: LOTR });
        catalog.insert(Theme::StarWars, ThemeData { name: "Star Wars", characters: STAR_WARS });
        catalog.insert(Theme::Marvel, ThemeData { name: "Marvel", characters: MARVEL });
        catalog.insert(Theme::Wow, ThemeData { name: "World of Warcraft", characters: WOW });
        catalog.insert(Theme::Slavic, ThemeData { name: "Slavic names", characters: SLAVIC });
        catalog.insert(Theme::Witcher, ThemeData { name: "Witcher", characters: WITCHER });
        catalog
    };
}

/// Union of the character pools for all selected themes. The `Random`
/// marker contributes nothing, so an empty selection or a bare `Random`
/// yields an empty pool and the caller drops to word-pool generation.
pub fn characters_from_themes(selected: &[Theme]) -> Vec<&'static str> {
    let mut pool = Vec::new();
    for theme in selected {
        if *theme == Theme::Random {
            continue;
        }
        if let Some(data) = THEMES.get(theme) {
            pool.extend_from_slice(data.characters);
        }
    }
    pool
}
