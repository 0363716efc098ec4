use num_traits::{Float, FromPrimitive, One};

/// Mean radius of the Earth in meters, used for great circle distances.
pub const EARTH_MEAN_RADIUS: f64 = 6_371_000.0;

/// A point on the surface of the Earth given by its latitude and longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float + FromPrimitive;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Great circle distance in meters between two points, calculated with the haversine formula on a sphere
    /// with [`EARTH_MEAN_RADIUS`].
    fn distance(&self, other: &impl GeoPoint<Num = Self::Num>) -> Self::Num {
        let two = Self::Num::one() + Self::Num::one();
        let d_lat = other.lat_rad() - self.lat_rad();
        let d_lon = other.lon_rad() - self.lon_rad();

        let a = (d_lat / two).sin().powi(2)
            + self.lat_rad().cos() * other.lat_rad().cos() * (d_lon / two).sin().powi(2);
        let c = two * a.sqrt().atan2((Self::Num::one() - a).sqrt());

        Self::Num::from_f64(EARTH_MEAN_RADIUS).unwrap_or_else(Self::Num::nan) * c
    }

    /// Returns true if both coordinates of the points differ by less than `tolerance` degrees.
    fn coincides_with(&self, other: &impl GeoPoint<Num = Self::Num>, tolerance: Self::Num) -> bool {
        (self.lat() - other.lat()).abs() < tolerance && (self.lon() - other.lon()).abs() < tolerance
    }
}

/// A [`GeoPoint`] that can be constructed from coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude.
    fn latlon(lat: N, lon: N) -> Self;
    /// Creates a point from longitude and latitude.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}
