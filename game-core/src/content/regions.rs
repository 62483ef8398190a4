use super::{ContentProvider, sample_pool};
use game_types::{Difficulty, GameError, GameKind, MapKind, MapRegion};
use rand::Rng;

const US_STATES: &[(&str, &str, &str, &str)] = &[
    (
        "alabama",
        "Alabama",
        "AL",
        "Alabama was home to the first rocket that took people to the Moon, built in Huntsville!",
    ),
    ("alaska", "Alaska", "AK", "Alaska is the biggest state and has more than 3 million lakes!"),
    ("arizona", "Arizona", "AZ", "Arizona is home to the Grand Canyon, which is over a mile deep!"),
    (
        "arkansas",
        "Arkansas",
        "AR",
        "Arkansas has a park where you can dig for real diamonds and keep them!",
    ),
    (
        "california",
        "California",
        "CA",
        "California has the tallest trees in the world, the giant redwoods!",
    ),
    ("colorado", "Colorado", "CO", "Colorado has more tall mountain peaks than any other state!"),
    (
        "connecticut",
        "Connecticut",
        "CT",
        "Connecticut is where the first hamburger sandwich was served in America!",
    ),
    ("delaware", "Delaware", "DE", "Delaware was the very first state to join the United States!"),
    (
        "florida",
        "Florida",
        "FL",
        "Florida is the only place in the world where alligators and crocodiles live together!",
    ),
    ("georgia", "Georgia", "GA", "Georgia grows more peanuts than any other state!"),
    (
        "hawaii",
        "Hawaii",
        "HI",
        "Hawaii is made of islands built by volcanoes, and some are still erupting!",
    ),
    (
        "idaho",
        "Idaho",
        "ID",
        "Idaho grows about one third of all the potatoes in the United States!",
    ),
    (
        "illinois",
        "Illinois",
        "IL",
        "Illinois is home to Chicago, where the first skyscraper was built!",
    ),
    (
        "indiana",
        "Indiana",
        "IN",
        "Indiana hosts the Indianapolis 500, one of the biggest car races in the world!",
    ),
    ("iowa", "Iowa", "IA", "Iowa has more pigs than people!"),
    ("kansas", "Kansas", "KS", "Kansas is right in the middle of the lower 48 states!"),
    (
        "kentucky",
        "Kentucky",
        "KY",
        "Kentucky has Mammoth Cave, the longest cave system in the world!",
    ),
    ("louisiana", "Louisiana", "LA", "Louisiana has more alligators than any other state!"),
    ("maine", "Maine", "ME", "Maine catches more lobsters than any other state!"),
    (
        "maryland",
        "Maryland",
        "MD",
        "Maryland is famous for its blue crabs from the Chesapeake Bay!",
    ),
    (
        "massachusetts",
        "Massachusetts",
        "MA",
        "Massachusetts is where basketball and volleyball were invented!",
    ),
    ("michigan", "Michigan", "MI", "Michigan touches four of the five Great Lakes!"),
    (
        "minnesota",
        "Minnesota",
        "MN",
        "Minnesota is called the Land of 10,000 Lakes, but it actually has even more!",
    ),
    (
        "mississippi",
        "Mississippi",
        "MS",
        "Mississippi is named after the great river that runs along its side!",
    ),
    ("missouri", "Missouri", "MO", "Missouri has the Gateway Arch, the tallest arch in the world!"),
    ("montana", "Montana", "MT", "Montana has more kinds of mammals than any other state!"),
    ("nebraska", "Nebraska", "NE", "Nebraska is where the drink mix Kool-Aid was invented!"),
    ("nevada", "Nevada", "NV", "Nevada is the driest state in the whole country!"),
    (
        "new-hampshire",
        "New Hampshire",
        "NH",
        "New Hampshire has Mount Washington, where some of the fastest winds on Earth were measured!",
    ),
    (
        "new-jersey",
        "New Jersey",
        "NJ",
        "New Jersey has more diners than any other place in the world!",
    ),
    (
        "new-mexico",
        "New Mexico",
        "NM",
        "New Mexico has a balloon festival with hundreds of hot air balloons!",
    ),
    ("new-york", "New York", "NY", "New York City has the Statue of Liberty, a gift from France!"),
    (
        "north-carolina",
        "North Carolina",
        "NC",
        "North Carolina is where the Wright brothers made the first airplane flight!",
    ),
    (
        "north-dakota",
        "North Dakota",
        "ND",
        "North Dakota grows more sunflowers than any other state!",
    ),
    ("ohio", "Ohio", "OH", "Ohio is the birthplace of seven United States presidents!"),
    ("oklahoma", "Oklahoma", "OK", "Oklahoma has more man-made lakes than any other state!"),
    ("oregon", "Oregon", "OR", "Oregon has Crater Lake, the deepest lake in the United States!"),
    (
        "pennsylvania",
        "Pennsylvania",
        "PA",
        "Pennsylvania is where the Liberty Bell and lots of chocolate come from!",
    ),
    ("rhode-island", "Rhode Island", "RI", "Rhode Island is the smallest state in the country!"),
    (
        "south-carolina",
        "South Carolina",
        "SC",
        "South Carolina has a town where the first golf club in America was started!",
    ),
    (
        "south-dakota",
        "South Dakota",
        "SD",
        "South Dakota has Mount Rushmore, with four giant presidents carved into rock!",
    ),
    (
        "tennessee",
        "Tennessee",
        "TN",
        "Tennessee is known as the home of country music in Nashville!",
    ),
    ("texas", "Texas", "TX", "Texas was once its own country before it became a state!"),
    ("utah", "Utah", "UT", "Utah has the Great Salt Lake, which is saltier than the ocean!"),
    ("vermont", "Vermont", "VT", "Vermont makes more maple syrup than any other state!"),
    (
        "virginia",
        "Virginia",
        "VA",
        "Virginia is the birthplace of eight presidents, more than any other state!",
    ),
    ("washington", "Washington", "WA", "Washington grows more apples than any other state!"),
    (
        "west-virginia",
        "West Virginia",
        "WV",
        "West Virginia is almost all mountains and is called the Mountain State!",
    ),
    ("wisconsin", "Wisconsin", "WI", "Wisconsin makes more cheese than any other state!"),
    (
        "wyoming",
        "Wyoming",
        "WY",
        "Wyoming has Yellowstone, the very first national park in the world!",
    ),
];

/// States most kids already know, used for the easy map
const EASY_STATE_IDS: &[&str] = &[
    "california",
    "texas",
    "florida",
    "new-york",
    "alaska",
    "hawaii",
    "washington",
    "arizona",
    "colorado",
    "illinois",
    "michigan",
    "ohio",
    "georgia",
    "pennsylvania",
    "massachusetts",
];

const WORLD: &[(&str, &str, &str)] = &[
    (
        "north-america",
        "North America",
        "North America has every type of climate, from frozen tundra to tropical beaches!",
    ),
    (
        "south-america",
        "South America",
        "South America is home to the Amazon Rainforest, which makes about 20% of the world's oxygen!",
    ),
    ("europe", "Europe", "Europe has over 200 languages spoken across its many countries!"),
    (
        "africa",
        "Africa",
        "Africa is home to the Sahara Desert, the largest hot desert in the world!",
    ),
    (
        "asia",
        "Asia",
        "Asia is the biggest continent and more than half the people on Earth live there!",
    ),
    (
        "australia-oceania",
        "Australia/Oceania",
        "Australia is the only continent that is also a single country!",
    ),
    (
        "antarctica",
        "Antarctica",
        "Antarctica is the coldest place on Earth, it can get as cold as -128 degrees Fahrenheit!",
    ),
    (
        "united-states",
        "United States",
        "The United States has 50 states, and Alaska is so big it could fit Texas inside it twice!",
    ),
    ("canada", "Canada", "Canada has more lakes than all other countries combined!"),
    (
        "mexico",
        "Mexico",
        "Mexico invented chocolate, the ancient Aztecs drank it as a spicy drink!",
    ),
    (
        "brazil",
        "Brazil",
        "Brazil is home to the Amazon River, which carries more water than any other river on Earth!",
    ),
    (
        "argentina",
        "Argentina",
        "Argentina is famous for the tango dance and has huge grasslands called the Pampas!",
    ),
    (
        "united-kingdom",
        "United Kingdom",
        "The United Kingdom includes England, Scotland, Wales, and Northern Ireland!",
    ),
    (
        "france",
        "France",
        "France is famous for the Eiffel Tower, and French people eat about 30,000 tons of snails every year!",
    ),
    ("germany", "Germany", "Germany is where the gummy bear was invented in 1922!"),
    (
        "spain",
        "Spain",
        "Spain has a tomato-throwing festival called La Tomatina where people throw tomatoes at each other!",
    ),
    ("italy", "Italy", "Italy is shaped like a boot and is where pizza was invented!"),
    ("russia", "Russia", "Russia is the biggest country in the world, it spans 11 time zones!"),
    (
        "china",
        "China",
        "China built the Great Wall, which is so long it would stretch from New York to Los Angeles and back!",
    ),
    (
        "japan",
        "Japan",
        "Japan has more than 6,800 islands and is home to super-fast bullet trains!",
    ),
    ("india", "India", "India has the most movies made every year and invented the number zero!"),
    (
        "egypt",
        "Egypt",
        "Egypt is famous for its pyramids, the Great Pyramid is made of over 2 million stone blocks!",
    ),
    (
        "south-africa",
        "South Africa",
        "South Africa has three capital cities and is home to penguins on its beaches!",
    ),
    (
        "australia",
        "Australia",
        "Australia has animals found nowhere else on Earth, like kangaroos and platypuses!",
    ),
    (
        "saudi-arabia",
        "Saudi Arabia",
        "Saudi Arabia is mostly desert and has no rivers, but it turns ocean water into drinking water!",
    ),
];

/// Clickable map regions: US states for easy and medium, the world map for hard
pub struct RegionAtlas {
    us_states: Vec<MapRegion>,
    easy_ids: Vec<String>,
    world: Vec<MapRegion>,
}

impl RegionAtlas {
    pub fn new(us_states: Vec<MapRegion>, easy_ids: Vec<String>, world: Vec<MapRegion>) -> Self {
        Self {
            us_states,
            easy_ids,
            world,
        }
    }

    pub fn builtin() -> Self {
        let us_states = US_STATES
            .iter()
            .map(|(id, name, abbreviation, fun_fact)| MapRegion {
                id: id.to_string(),
                name: name.to_string(),
                abbreviation: Some(abbreviation.to_string()),
                fun_fact: fun_fact.to_string(),
            })
            .collect();
        let world = WORLD
            .iter()
            .map(|(id, name, fun_fact)| MapRegion {
                id: id.to_string(),
                name: name.to_string(),
                abbreviation: None,
                fun_fact: fun_fact.to_string(),
            })
            .collect();
        let easy_ids = EASY_STATE_IDS.iter().map(|id| id.to_string()).collect();

        Self::new(us_states, easy_ids, world)
    }

    pub fn map_kind(difficulty: Difficulty) -> MapKind {
        match difficulty {
            Difficulty::Hard => MapKind::World,
            _ => MapKind::UsStates,
        }
    }

    pub fn regions(&self, difficulty: Difficulty) -> Vec<MapRegion> {
        match difficulty {
            Difficulty::Easy => self
                .us_states
                .iter()
                .filter(|region| self.easy_ids.contains(&region.id))
                .cloned()
                .collect(),
            Difficulty::Medium => self.us_states.clone(),
            Difficulty::Hard => self.world.clone(),
        }
    }

    /// Look a region up by id on either map
    pub fn region(&self, id: &str) -> Option<&MapRegion> {
        self.us_states
            .iter()
            .chain(self.world.iter())
            .find(|region| region.id == id)
    }
}

impl Default for RegionAtlas {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentProvider for RegionAtlas {
    type Target = MapRegion;

    fn game(&self) -> GameKind {
        GameKind::MapExplorer
    }

    fn draw_set<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<MapRegion>, GameError> {
        sample_pool(GameKind::MapExplorer, difficulty, &self.regions(difficulty), count, rng)
    }
}
