use pixelstrip_core::{
    test_utils::{sequence, CountingRandom, RecordingDriver},
    Color, Config, Pixel, Region, Sampling, Section, Strip, DEFAULT_BRIGHTNESS,
};

const RED: Color = Color::new(255, 0, 0);
const BLUE: Color = Color::new(0, 0, 255);

/// Always returns the lower bound.
fn lowest(lo: u32, _hi: u32) -> u32 {
    lo
}

fn init_counting_strip<R>(num_leds: usize, rng: R) -> (Strip<RecordingDriver>, impl Fn() -> usize)
where
    R: pixelstrip_core::RandomSource + 'static,
{
    let _ = env_logger::try_init();

    let rng = CountingRandom::new(rng);
    let counter = rng.counter();
    let strip =
        Strip::with_random_source(Config::new(num_leds), RecordingDriver::default(), rng).unwrap();
    (strip, move || counter.get())
}

#[test]
fn test_section_brightness_random_solid_samples_once() {
    let (mut strip, calls) = init_counting_strip(8, lowest);

    strip
        .set_section_brightness_random_solid(Section::new(5).at(2), 0.2, 0.2)
        .unwrap();

    assert_eq!(calls(), 1);
    for i in 2..7 {
        assert_eq!(strip.pixel_brightness(i), Ok(0.2));
    }
    for i in [0, 1, 7] {
        assert_eq!(strip.pixel_brightness(i), Ok(DEFAULT_BRIGHTNESS));
    }
}

#[test]
fn test_section_brightness_random_samples_per_pixel() {
    let (mut strip, calls) = init_counting_strip(8, sequence(vec![100, 300, 500, 700]));

    strip
        .set_section_brightness_random(Section::new(4).at(1), 0.0, 1.0)
        .unwrap();

    assert_eq!(calls(), 4);
    let brightness: Vec<_> = strip.pixels()[1..5]
        .iter()
        .map(|pixel| pixel.brightness)
        .collect();
    assert_eq!(brightness, [0.1, 0.3, 0.5, 0.7]);
}

#[test]
fn test_set_section_random_slot() {
    let (mut strip, calls) = init_counting_strip(3, sequence(vec![10, 20, 30]));

    strip.set_section(&[Some(RED), None, Some(BLUE)], 0).unwrap();

    assert_eq!(strip.pixel_color(0), Ok(RED));
    assert_eq!(strip.pixel_color(1), Ok(Color::new(10, 20, 30)));
    assert_eq!(strip.pixel_color(2), Ok(BLUE));
    // A single random color takes one call per channel.
    assert_eq!(calls(), 3);
}

#[test]
fn test_set_section_random_slots_are_independent() {
    let (mut strip, calls) = init_counting_strip(4, sequence(vec![1, 2, 3, 4, 5, 6]));

    strip.set_section::<Color>(&[None, None], 2).unwrap();

    assert_eq!(calls(), 6);
    assert_eq!(strip.pixel_color(2), Ok(Color::new(1, 2, 3)));
    assert_eq!(strip.pixel_color(3), Ok(Color::new(4, 5, 6)));
}

#[test]
fn test_pixel_random() {
    let (mut strip, calls) = init_counting_strip(2, sequence(vec![300, 1, 255]));
    strip.set_pixel_brightness(1, 0.6).unwrap();

    strip.set_pixel_random(1).unwrap();

    assert_eq!(calls(), 3);
    // The sequence wraps values into the requested range.
    assert_eq!(strip.pixel(1), Ok(Pixel::new(Color::new(44, 1, 255), 0.6)));
    assert_eq!(strip.pixel_color(0), Ok(Color::default()));
}

#[test]
fn test_pixel_brightness_random_clamps_bounds() {
    let mut requested = Vec::new();
    let (mut strip, calls) = init_counting_strip(1, lowest);

    strip.set_pixel_brightness_random(0, 1.7, -3.0).unwrap();
    assert_eq!(calls(), 1);
    assert_eq!(strip.pixel_brightness(0), Ok(0.0));

    // Swapped bounds are restored into the right order.
    strip.change_number_generator(move |lo: u32, hi: u32| {
        requested.push((lo, hi));
        assert_eq!(requested, [(250, 750)]);
        hi
    });
    strip.set_pixel_brightness_random(0, 0.75, 0.25).unwrap();
    assert_eq!(strip.pixel_brightness(0), Ok(0.75));
}

#[test]
fn test_all_random_is_independent() {
    let (mut strip, calls) = init_counting_strip(4, sequence((0..12).collect()));

    strip.set_all_random();

    assert_eq!(calls(), 12);
    let colors: Vec<_> = strip.pixels().iter().map(|pixel| pixel.color).collect();
    assert_eq!(
        colors,
        [
            Color::new(0, 1, 2),
            Color::new(3, 4, 5),
            Color::new(6, 7, 8),
            Color::new(9, 10, 11),
        ]
    );
}

#[test]
fn test_all_random_solid_samples_once() {
    let (mut strip, calls) = init_counting_strip(16, sequence(vec![12, 34, 56]));

    strip.set_all_random_solid();

    assert_eq!(calls(), 3);
    assert!(strip
        .pixels()
        .iter()
        .all(|pixel| pixel.color == Color::new(12, 34, 56)));
}

#[test]
fn test_all_brightness_random() {
    let (mut strip, calls) = init_counting_strip(5, sequence(vec![0, 250, 500, 750, 1000]));

    strip.set_all_brightness_random(0.0, 1.0);
    assert_eq!(calls(), 5);
    let brightness: Vec<_> = strip.pixels().iter().map(|pixel| pixel.brightness).collect();
    assert_eq!(brightness, [0.0, 0.25, 0.5, 0.75, 1.0]);

    strip.set_all_brightness_random_solid(0.0, 1.0);
    assert_eq!(calls(), 6);
    assert!(strip.pixels().iter().all(|pixel| pixel.brightness == 0.0));
}

#[test]
fn test_section_random_solid_and_independent() {
    let (mut strip, calls) = init_counting_strip(6, sequence((1..=9).collect()));

    strip.set_section_random_solid(Section::new(3).at(3)).unwrap();
    assert_eq!(calls(), 3);
    for i in 3..6 {
        assert_eq!(strip.pixel_color(i), Ok(Color::new(1, 2, 3)));
    }

    strip.set_section_random(Section::new(2)).unwrap();
    assert_eq!(calls(), 9);
    assert_eq!(strip.pixel_color(0), Ok(Color::new(4, 5, 6)));
    assert_eq!(strip.pixel_color(1), Ok(Color::new(7, 8, 9)));
    assert_eq!(strip.pixel_color(2), Ok(Color::default()));
}

#[test]
fn test_empty_region_does_not_sample() {
    let (mut strip, calls) = init_counting_strip(4, lowest);

    strip.set_section_random_solid(Section::new(0).at(2)).unwrap();
    strip.set_section_random(Section::new(0)).unwrap();
    strip
        .set_section_brightness_random_solid(Section::new(0).at(4), 0.0, 1.0)
        .unwrap();

    assert_eq!(calls(), 0);
}

#[test]
fn test_failed_random_op_does_not_sample() {
    let (mut strip, calls) = init_counting_strip(2, lowest);

    strip.set_pixel_random(2).unwrap_err();
    strip.set_section_random_solid(Section::new(3)).unwrap_err();
    strip
        .fill_brightness_random(Region::Pixel(5), 0.0, 1.0, Sampling::Solid)
        .unwrap_err();

    assert_eq!(calls(), 0);
}

#[test]
fn test_change_number_generator() {
    let (mut strip, first_calls) = init_counting_strip(3, sequence(vec![1, 2, 3]));
    strip.set_pixel_random(0).unwrap();
    strip.set_pixel_brightness(0, 0.42).unwrap();
    assert_eq!(first_calls(), 3);

    let second = CountingRandom::new(sequence(vec![200]));
    let second_calls = second.counter();
    strip.change_number_generator(second);

    // Swapping the generator keeps the pixels intact.
    assert_eq!(strip.pixel(0), Ok(Pixel::new(Color::new(1, 2, 3), 0.42)));

    strip.set_pixel_random(1).unwrap();
    assert_eq!(strip.pixel_color(1), Ok(Color::new(200, 200, 200)));
    assert_eq!(first_calls(), 3);
    assert_eq!(second_calls.get(), 3);
}
