//! Builtin cover catalog for the published collection banner.

use crate::collage::model::CollageSpec;

/// Cover sources of the published collections, in catalog order.
///
/// A few covers appear twice on purpose; the shuffle spreads them out.
const FRITH_HILTON_COVERS: [&str; 49] = [
    "https://www.frithhilton.com.ng/images/collections/i/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/ii/Cover Image.png",
    "https://www.frithhilton.com.ng/images/collections/iii/Cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/iv/Cover Image.png",
    "https://www.frithhilton.com.ng/images/collections/v/cover.png",
    "https://www.frithhilton.com.ng/images/collections/vi/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/vii/Cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/viii/Cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/ix/Cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/x/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/xi/cover.jpg",
    "https://raw.githubusercontent.com/DbRDYZmMRu/Ut67QIwioF/refs/heads/main/images/collections/xi-ii/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/xii/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/xiii/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/xiv/cover.jpeg",
    "https://www.frithhilton.com.ng/images/collections/xv/cover.jpeg",
    "https://www.frithhilton.com.ng/images/collections/xvi/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/xvii/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/xviii/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/xix/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/xx/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/xxi/cover.jpg",
    "https://raw.githubusercontent.com/DbRDYZmMRu/Ut67QIwioF/refs/heads/main/images/collections/2020-cover.jpg",
    "https://raw.githubusercontent.com/DbRDYZmMRu/fhw-two/refs/heads/main/books/1965/coverDesign.jpg",
    "https://www.frithhilton.com.ng/images/collections/drCarlHillI/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/drCarlHill/two/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/drCarlHill/three/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/drCarlHill/four/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/drCarlHill/five/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/1/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/2/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/3/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/4/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/5/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/6/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/7/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/8/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/9/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/10/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/11/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/12/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/xiv/cover.jpeg",
    "https://www.frithhilton.com.ng/images/collections/viii/Cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/xiii/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/xvii/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/13/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/14/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/15/cover.jpg",
    "https://www.frithhilton.com.ng/images/collections/W2W/16/cover.jpg",
];

impl CollageSpec {
    /// Spec of the published 1080x360 banner: all 49 catalog covers in a
    /// 14x4 grid with a 2 px gap, white background, light-grey placeholders.
    pub fn frith_hilton_banner() -> Self {
        Self {
            width: 1080,
            height: 360,
            cols: 14,
            rows: 4,
            gap_px: 2.0,
            background_rgb8: [255, 255, 255],
            placeholder_rgb8: [0xf8, 0xf9, 0xfa],
            fill: crate::collage::model::FillMode::Placeholder,
            seed: None,
            sources: FRITH_HILTON_COVERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/collage/catalog.rs"]
mod tests;
