use super::output::{print_locations_json, print_locations_table};
use super::{fail, load_config};
use crate::LocationsArgs;
use multiad_core::locations::{paginate, LocationBook, LocationQuery};
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &LocationsArgs) {
    let rc = load_config("locations", config, profile);
    let book = LocationBook::load(&rc.locations_file).unwrap_or_else(|e| fail("locations", e));

    let query = LocationQuery {
        search: args.search.clone(),
        state: args.state.clone(),
        group: args.group.clone(),
    };
    let matches = query.apply(&book).unwrap_or_else(|e| fail("locations", e));
    let page = paginate(&matches, args.page as usize, args.per_page as usize);

    if args.json {
        print_locations_json(&page);
    } else {
        print_locations_table(&page);
    }
}
