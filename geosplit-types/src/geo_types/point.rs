use geo_types::{point, CoordFloat};
use num_traits::FromPrimitive;

use crate::geo::{GeoPoint, NewGeoPoint};

impl<T: CoordFloat + FromPrimitive> GeoPoint for geo_types::Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lon(&self) -> Self::Num {
        self.x()
    }
}

impl<T: CoordFloat + FromPrimitive> NewGeoPoint<T> for geo_types::Point<T> {
    fn latlon(lat: T, lon: T) -> Self {
        point!(x: lon, y: lat)
    }
}
