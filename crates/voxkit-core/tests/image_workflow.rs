//! End-to-end behaviour of image handles, dispatch and observers.

use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use voxkit::alg::{Dft, Mirror, Randomize, Stat, Threshold, ToComplex, ToReal, ComplexPart};
use voxkit::core::lattice::{AxisMask, Extent, Point, Size};
use voxkit::engine::Normalization;
use voxkit::{
    Complex, DataObserver, Domain, ImageError, ImageHandle, ImageView, ToolkitConfig, ValueType,
};

const TOL: f64 = 1e-9;

fn example_extent() -> Extent {
    Extent::from_size(Point::new(-2, -1, 1), Size::new(4, 3, 2).unwrap()).unwrap()
}

fn random_real(extent: Extent, seed: u64) -> ImageHandle {
    let image = ImageHandle::create(extent, ValueType::Real, Domain::Spatial).unwrap();
    image.apply_in_place(&mut Randomize::new(seed, -1.0, 1.0)).unwrap();
    image
}

fn assert_close(a: Complex<f64>, b: Complex<f64>) {
    assert!((a - b).norm() < TOL, "{a} != {b}");
}

#[test]
fn mirror_about_yz_plane_maps_every_point() {
    let original = random_real(example_extent(), 2024);
    let mirrored = original.apply(&mut Mirror::new(AxisMask::X)).unwrap();

    assert_eq!(
        mirrored.extent().unwrap(),
        Extent::new(Point::new(-1, -1, 1), Point::new(2, 1, 2))
    );
    for p in original.points().unwrap() {
        let q = Point::new(-p.x, p.y, p.z);
        assert_eq!(mirrored.get_real(q).unwrap(), original.get_real(p).unwrap());
    }
}

#[test]
fn spatial_only_algorithm_rejects_frequency_data_untouched() {
    let spectrum = random_real(example_extent(), 5)
        .apply(&mut Dft::default())
        .unwrap();
    let before = spectrum.copy().unwrap();

    let err = spectrum.apply_in_place(&mut Threshold::new(0.5)).unwrap_err();
    assert!(matches!(err, ImageError::UnsupportedVariant { .. }));
    for p in spectrum.points().unwrap() {
        assert_eq!(
            spectrum.get_complex(p).unwrap(),
            before.get_complex(p).unwrap()
        );
    }
}

#[test]
fn real_and_complex_spectra_agree_and_are_hermitian() {
    let image = random_real(example_extent(), 99);
    let half = image.apply(&mut Dft::default()).unwrap();
    let full = image
        .apply(&mut ToComplex)
        .unwrap()
        .apply(&mut Dft::default())
        .unwrap();

    assert_eq!(half.domain().unwrap(), Domain::HalfFrequency);
    assert_eq!(full.domain().unwrap(), Domain::Frequency);
    let spectrum = full.extent().unwrap();
    assert_eq!(half.extent().unwrap(), spectrum);
    assert_eq!(spectrum, Extent::centered(Size::new(4, 3, 2).unwrap()).unwrap());

    for k in spectrum.iter() {
        let f = full.get_complex(k).unwrap();
        assert_close(half.get_complex(k).unwrap(), f);
        let minus_k = spectrum.mirror_point(k, AxisMask::ALL);
        assert_close(full.get_complex(minus_k).unwrap(), f.conj());
    }
}

#[test]
fn inverse_transform_restores_the_original_image() {
    let image = random_real(example_extent(), 7);
    let restored = image
        .apply(&mut Dft::default())
        .unwrap()
        .apply(&mut Dft::default())
        .unwrap();
    assert_eq!(restored.extent().unwrap(), example_extent());
    assert_eq!(restored.value_type().unwrap(), ValueType::Real);
    for p in image.points().unwrap() {
        let a = restored.get_real(p).unwrap();
        let b = image.get_real(p).unwrap();
        assert!((a - b).abs() < TOL, "{p}: {a} != {b}");
    }

    let complex = image.apply(&mut ToComplex).unwrap();
    let back = complex
        .apply(&mut Dft::default())
        .unwrap()
        .apply(&mut Dft::default())
        .unwrap()
        .apply(&mut ToReal::new(ComplexPart::Real))
        .unwrap();
    for p in image.points().unwrap() {
        assert!((back.get_real(p).unwrap() - image.get_real(p).unwrap()).abs() < TOL);
    }
}

#[test]
fn unitary_transform_from_config_preserves_energy() {
    let config = ToolkitConfig::from_toml_str("[transform]\nnormalization = \"unitary\"\n").unwrap();
    assert_eq!(config.transform.normalization, Normalization::Unitary);

    let mut rng = StdRng::seed_from_u64(11);
    let extent = Extent::from_size(Point::new(3, -4, 0), Size::new(5, 4, 3).unwrap()).unwrap();
    let image = ImageHandle::create(extent, ValueType::Complex, Domain::Spatial).unwrap();
    for p in extent.iter() {
        image
            .set_complex(p, Complex::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .unwrap();
    }
    let spectrum = image.apply(&mut Dft::from_config(&config)).unwrap();

    let energy = |handle: &ImageHandle| -> f64 {
        handle
            .points()
            .unwrap()
            .map(|p| handle.get_complex(p).unwrap().norm_sqr())
            .sum()
    };
    assert!((energy(&image) - energy(&spectrum)).abs() < 1e-9);
}

struct Recorder {
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl DataObserver for Recorder {
    fn on_update(&mut self, image: &ImageView<'_>) -> Result<(), ImageError> {
        let size = image.size();
        self.log
            .borrow_mut()
            .push(format!("{} update {}", self.name, size));
        Ok(())
    }

    fn on_destroy(&mut self) {
        self.log.borrow_mut().push(format!("{} destroy", self.name));
    }
}

#[test]
fn observers_follow_registration_order_through_the_lifecycle() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::new(RefCell::new(Recorder {
        name: "first",
        log: log.clone(),
    }));
    let second = Rc::new(RefCell::new(Recorder {
        name: "second",
        log: log.clone(),
    }));

    let image = random_real(example_extent(), 1);
    let weak = image.downgrade();
    image.add_observer(&first).unwrap();
    weak.add_observer(&second).unwrap();
    assert_eq!(image.observer_count().unwrap(), 2);

    image
        .resize(Extent::from_size(Point::ORIGIN, Size::new(2, 2, 2).unwrap()).unwrap())
        .unwrap();

    // Out-of-place results and read-only passes notify nobody.
    let _copy = image.apply(&mut ToComplex).unwrap();
    image.apply_const(&mut Stat::new()).unwrap();

    // A rejected dispatch does not notify either.
    let spectrum = image.apply(&mut Dft::default()).unwrap();
    spectrum.add_observer(&first).unwrap();
    assert!(spectrum.apply_in_place(&mut Threshold::new(0.0)).is_err());
    drop(spectrum);

    drop(image);
    assert!(!weak.is_valid());
    assert!(matches!(
        weak.add_observer(&first),
        Err(ImageError::DataDestroyed)
    ));

    assert_eq!(
        *log.borrow(),
        vec![
            "first update 2x2x2",
            "second update 2x2x2",
            "first destroy",
            "first destroy",
            "second destroy",
        ]
    );
}

#[test]
fn extract_and_paste_move_regions_between_images() {
    let source = random_real(example_extent(), 3);
    let region = Extent::new(Point::new(-1, 0, 1), Point::new(0, 1, 2));
    let piece = source.extract(region).unwrap();
    assert_eq!(piece.extent().unwrap(), region);

    let target = ImageHandle::create(example_extent(), ValueType::Complex, Domain::Spatial).unwrap();
    target.paste(&piece).unwrap();
    for p in example_extent().iter() {
        let expected = if region.contains(p) {
            source.get_real(p).unwrap()
        } else {
            0.0
        };
        assert_eq!(target.get_complex(p).unwrap(), Complex::new(expected, 0.0));
    }

    let spectrum = source.apply(&mut Dft::default()).unwrap();
    assert!(matches!(
        spectrum.extract(region),
        Err(ImageError::UnsupportedVariant { .. })
    ));
}

#[test]
fn half_frequency_handle_rejects_points_outside_its_extent() {
    let extent = Extent::centered(Size::new(4, 4, 1).unwrap()).unwrap();
    let spectrum = ImageHandle::create(extent, ValueType::Complex, Domain::HalfFrequency).unwrap();
    assert_eq!(spectrum.extent().unwrap(), extent);

    let nyquist = Point::new(0, 2, 0);
    assert!(!extent.contains(nyquist));
    assert!(matches!(
        spectrum.get_complex(nyquist),
        Err(ImageError::OutOfBounds { .. })
    ));
    assert!(matches!(
        spectrum.set_complex(nyquist, Complex::new(1.0, 0.0)),
        Err(ImageError::OutOfBounds { .. })
    ));

    // The same storage is reachable through its logical mirror.
    spectrum.set_complex(Point::new(0, -2, 0), Complex::new(1.0, 2.0)).unwrap();
    assert_eq!(spectrum.get_complex(Point::new(0, -2, 0)).unwrap(), Complex::new(1.0, 2.0));
}
