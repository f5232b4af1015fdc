use std::fmt;

use serde::Serialize;

use super::boundaries::RatingBoundaries;

/// CII 등급. A가 가장 우수하다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ImoCiiRating {
    A,
    B,
    C,
    D,
    E,
}

impl ImoCiiRating {
    pub fn as_str(self) -> &'static str {
        match self {
            ImoCiiRating::A => "A",
            ImoCiiRating::B => "B",
            ImoCiiRating::C => "C",
            ImoCiiRating::D => "D",
            ImoCiiRating::E => "E",
        }
    }
}

impl fmt::Display for ImoCiiRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// 달성 CII를 경계와 비교해 등급을 매긴다.
///
/// 비교는 모두 엄격한 `<` 이다. 경계값과 같으면 한 단계 낮은 등급이 된다.
pub fn rate(attained_cii: f64, boundaries: &RatingBoundaries) -> ImoCiiRating {
    let b = &boundaries.boundaries;
    if attained_cii < b.superior {
        ImoCiiRating::A
    } else if attained_cii < b.lower {
        ImoCiiRating::B
    } else if attained_cii < b.upper {
        ImoCiiRating::C
    } else if attained_cii < b.inferior {
        ImoCiiRating::D
    } else {
        ImoCiiRating::E
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::boundaries::rating_boundaries;
    use crate::ship::{Ship, ShipType};

    fn bulk_boundaries() -> RatingBoundaries {
        let ship = Ship::new(ShipType::BulkCarrier, 25_000.0, 0.0).unwrap();
        rating_boundaries(&ship, 10.0, 2023).unwrap()
    }

    #[test]
    fn ties_fall_to_the_worse_grade() {
        let b = bulk_boundaries();
        assert_eq!(rate(b.boundaries.superior, &b), ImoCiiRating::B);
        assert_eq!(rate(b.boundaries.lower, &b), ImoCiiRating::C);
        assert_eq!(rate(b.boundaries.upper, &b), ImoCiiRating::D);
        assert_eq!(rate(b.boundaries.inferior, &b), ImoCiiRating::E);
    }

    #[test]
    fn grades_cover_the_whole_line() {
        let b = bulk_boundaries();
        assert_eq!(rate(0.0, &b), ImoCiiRating::A);
        assert_eq!(rate(f64::MAX, &b), ImoCiiRating::E);
        // NaN은 어떤 경계보다도 작지 않다.
        assert_eq!(rate(f64::NAN, &b), ImoCiiRating::E);
    }
}
