//! Platform density tiers.
//!
//! Each tier maps to a fixed multiplier relative to the platform's reference
//! density and to the place its variant is written. The tables are `const`
//! and ordered from the lowest to the highest density; emitters iterate them
//! in that order.
//!
//! | Android | multiplier | directory |
//! |---|---|---|
//! | MDPI | 1.0 | `drawable-mdpi` |
//! | HDPI | 1.5 | `drawable-hdpi` |
//! | XHDPI | 2.0 | `drawable-xdpi` |
//! | XXHDPI | 3.0 | `drawable-xxhdpi` |
//! | XXXHDPI | 4.0 | `drawable-xxxhdpi` |
//!
//! | iOS | multiplier | filename suffix |
//! |---|---|---|
//! | 1x | 1 | (none) |
//! | 2x | 2 | `@2x` |
//! | 3x | 3 | `@3x` |

/// Android density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AndroidDensity {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl AndroidDensity {
    pub const ALL: [AndroidDensity; 5] = [
        AndroidDensity::Mdpi,
        AndroidDensity::Hdpi,
        AndroidDensity::Xhdpi,
        AndroidDensity::Xxhdpi,
        AndroidDensity::Xxxhdpi,
    ];

    /// The bucket a source image is assumed to be drawn for when no target
    /// size is requested.
    pub const REFERENCE: AndroidDensity = AndroidDensity::Xxxhdpi;

    pub const fn multiplier(self) -> f64 {
        match self {
            AndroidDensity::Mdpi => 1.0,
            AndroidDensity::Hdpi => 1.5,
            AndroidDensity::Xhdpi => 2.0,
            AndroidDensity::Xxhdpi => 3.0,
            AndroidDensity::Xxxhdpi => 4.0,
        }
    }

    /// Resource directory name. The xhdpi bucket keeps the historical
    /// `drawable-xdpi` spelling that existing consumers of this layout expect.
    pub const fn directory(self) -> &'static str {
        match self {
            AndroidDensity::Mdpi => "drawable-mdpi",
            AndroidDensity::Hdpi => "drawable-hdpi",
            AndroidDensity::Xhdpi => "drawable-xdpi",
            AndroidDensity::Xxhdpi => "drawable-xxhdpi",
            AndroidDensity::Xxxhdpi => "drawable-xxxhdpi",
        }
    }

    /// Factor applied to a source drawn at [`Self::REFERENCE`] density.
    pub fn factor_from_reference(self) -> f64 {
        self.multiplier() / Self::REFERENCE.multiplier()
    }
}

/// iOS asset-catalog scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IosScale {
    X1,
    X2,
    X3,
}

impl IosScale {
    pub const ALL: [IosScale; 3] = [IosScale::X1, IosScale::X2, IosScale::X3];

    pub const REFERENCE: IosScale = IosScale::X3;

    pub const fn multiplier(self) -> f64 {
        match self {
            IosScale::X1 => 1.0,
            IosScale::X2 => 2.0,
            IosScale::X3 => 3.0,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            IosScale::X1 => "",
            IosScale::X2 => "@2x",
            IosScale::X3 => "@3x",
        }
    }

    /// Value of the `scale` key in `Contents.json`.
    pub const fn label(self) -> &'static str {
        match self {
            IosScale::X1 => "1x",
            IosScale::X2 => "2x",
            IosScale::X3 => "3x",
        }
    }

    pub fn factor_from_reference(self) -> f64 {
        self.multiplier() / Self::REFERENCE.multiplier()
    }

    /// `icon` → `icon@2x.png`
    pub fn filename(self, stem: &str) -> String {
        format!("{}{}.png", stem, self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_buckets_are_ordered_by_multiplier() {
        let multipliers: Vec<f64> = AndroidDensity::ALL.iter().map(|d| d.multiplier()).collect();
        assert_eq!(multipliers, vec![1.0, 1.5, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn android_directories() {
        let dirs: Vec<&str> = AndroidDensity::ALL.iter().map(|d| d.directory()).collect();
        assert_eq!(
            dirs,
            vec![
                "drawable-mdpi",
                "drawable-hdpi",
                "drawable-xdpi",
                "drawable-xxhdpi",
                "drawable-xxxhdpi"
            ]
        );
    }

    #[test]
    fn android_reference_factor() {
        assert_eq!(AndroidDensity::Mdpi.factor_from_reference(), 0.25);
        assert_eq!(AndroidDensity::Hdpi.factor_from_reference(), 0.375);
        assert_eq!(AndroidDensity::Xxxhdpi.factor_from_reference(), 1.0);
    }

    #[test]
    fn ios_filenames_and_labels() {
        let names: Vec<String> = IosScale::ALL.iter().map(|s| s.filename("icon")).collect();
        assert_eq!(names, vec!["icon.png", "icon@2x.png", "icon@3x.png"]);

        let labels: Vec<&str> = IosScale::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["1x", "2x", "3x"]);
    }

    #[test]
    fn ios_reference_is_3x() {
        assert_eq!(IosScale::X3.factor_from_reference(), 1.0);
        assert!((IosScale::X1.factor_from_reference() - 1.0 / 3.0).abs() < 1e-12);
    }
}
