use std::env;
use std::fs;
use std::path::Path;

/// Primary header names every bundled dataset must carry.
const REQUIRED_HEADERS: [&str; 6] = [
    "country_long",
    "country code",
    "name of powerplant",
    "primary_fuel",
    "capacity in MW",
    "start_year",
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("power_plant.csv");

    // Copy the dataset to OUT_DIR for include_str, after checking its header
    // so a broken fixture fails the build rather than the page load.
    let dataset_src = Path::new("../fixtures/power_plant.csv");
    if dataset_src.exists() {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(dataset_src)
            .expect("Failed to open power_plant.csv");
        let headers = rdr.headers().expect("Failed to read power_plant.csv header");
        for required in REQUIRED_HEADERS {
            if !headers.iter().any(|h| h.trim() == required) {
                panic!("power_plant.csv is missing column {:?}", required);
            }
        }
        fs::copy(dataset_src, &dest).unwrap();
    } else {
        fs::write(
            &dest,
            "country code,country_long,name of powerplant,primary_fuel,capacity in MW,latitude,longitude,start_year\nIDN,Indonesia,Suralaya,Coal,3400,-5.89,106.03,1984\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/power_plant.csv");
}
