// Writes the x and y noise previews of every preset for one seed:
// gallery/<preset>-x.png and gallery/<preset>-y.png

use displace_core::{Artwork, Axis, Preset};
use std::fs;
use std::path::Path;

fn main() {
    let size = 256;
    let seed = 42;
    let dir = Path::new("gallery");
    fs::create_dir_all(dir).unwrap();

    for preset in Preset::ALL {
        let settings = preset.settings().unwrap();
        let art = Artwork::new(size, size, seed, &settings);
        for (axis, suffix) in [(Axis::X, "x"), (Axis::Y, "y")] {
            let path = dir.join(format!("{}-{}.png", preset.name(), suffix));
            art.noise_image(axis).save(&path).unwrap();
            println!("Saved {}", path.display());
        }
    }
}
