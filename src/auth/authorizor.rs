use oso::{Oso, PolarClass};

use crate::auth::User;
use crate::entities::SavedRoute;

pub fn new() -> Oso {
    let mut o = Oso::new();

    o.register_class(User::get_polar_class()).unwrap();
    o.register_class(SavedRoute::get_polar_class()).unwrap();

    o.load_str(include_str!("rules.polar")).unwrap();

    o
}
