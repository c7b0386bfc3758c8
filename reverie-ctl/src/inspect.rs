//! `inspect`: report the geometry a manifest produces without running it

use reverie_player::domains::carousel::InfiniteCarousel;

use crate::host::SimulatedViewport;
use crate::manifest::{ManifestError, PageManifest};

pub fn report(manifest: &PageManifest) -> Result<Vec<String>, ManifestError> {
    let config = manifest.runtime_config()?;
    let mut viewport = SimulatedViewport::new(manifest.viewport.width);
    let mut lines = Vec::new();

    match InfiniteCarousel::mount(
        manifest.items.clone(),
        &mut viewport,
        config.carousel_config(),
    ) {
        Ok(carousel) => {
            let geometry = carousel.geometry();
            let track = carousel.display_track();
            lines.push(format!("items: {}", carousel.len()));
            lines.push(format!("pitch: {}px", geometry.pitch));
            lines.push(format!("visible: {}", geometry.visible_count));
            lines.push(format!("clones: {} per side", track.clone_count()));
            lines.push(format!("slots: {}", track.slot_count()));
            lines.push(format!(
                "initial: slot {}, offset {}px",
                carousel.position(),
                carousel.offset()
            ));
            lines.push(format!("layout: {}", layout_line(&track.layout(), track.clone_count())));
        }
        Err(reason) => lines.push(format!("carousel: inactive ({reason})")),
    }

    let unavailable = manifest.unavailable_tracks().len();
    lines.push(format!(
        "tracks: {} ({} unavailable)",
        manifest.tracks.len(),
        unavailable
    ));
    lines.push(format!(
        "surprise: {}",
        if manifest.surprise.is_some() {
            "present"
        } else {
            "absent"
        }
    ));
    Ok(lines)
}

/// Originals per slot with `|` around the steady range.
fn layout_line(layout: &[usize], clones: usize) -> String {
    let originals = layout.len().saturating_sub(2 * clones);
    let join = |slots: &[usize]| {
        slots
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };
    let (head, rest) = layout.split_at(clones.min(layout.len()));
    let (middle, tail) = rest.split_at(originals.min(rest.len()));
    format!("{} | {} | {}", join(head), join(middle), join(tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(items: usize, width: Option<f32>) -> PageManifest {
        let mut toml = String::new();
        if let Some(width) = width {
            toml.push_str(&format!("[viewport]\nwidth = {width:.1}\n"));
        }
        for i in 0..items {
            toml.push_str(&format!("[[items]]\nlabel = \"m{i}\"\nwidth = 300.0\n"));
        }
        toml::from_str(&toml).unwrap()
    }

    #[test]
    fn reports_reference_geometry() {
        let lines = report(&manifest(10, Some(1122.0))).unwrap();
        assert_eq!(lines[0], "items: 10");
        assert_eq!(lines[1], "pitch: 330px");
        assert_eq!(lines[2], "visible: 3");
        assert_eq!(lines[3], "clones: 4 per side");
        assert_eq!(lines[4], "slots: 18");
        assert_eq!(lines[5], "initial: slot 4, offset 1320px");
        assert_eq!(
            lines[6],
            "layout: 6 7 8 9 | 0 1 2 3 4 5 6 7 8 9 | 0 1 2 3"
        );
    }

    #[test]
    fn short_sequences_cycle_their_clones() {
        let lines = report(&manifest(2, Some(1122.0))).unwrap();
        assert_eq!(lines[6], "layout: 0 1 0 1 | 0 1 | 0 1 0 1");
    }

    #[test]
    fn reports_inactive_carousel() {
        let lines = report(&manifest(3, None)).unwrap();
        assert!(lines[0].starts_with("carousel: inactive"));
        assert_eq!(lines[1], "tracks: 0 (0 unavailable)");
        assert_eq!(lines[2], "surprise: absent");
    }
}
