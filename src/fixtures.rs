//! Shared datasets for unit tests.
use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// A:(0,0) B:(0,1) C:(10,10) D:(10,11).
pub fn quartet() -> Dataset {
    [("A", 0., 0.), ("B", 0., 1.), ("C", 10., 10.), ("D", 10., 11.)]
        .into_iter()
        .map(|(t, g, v)| Sample::new(t, g, v).expect("valid sample"))
        .collect::<Vec<Sample>>()
        .try_into()
        .expect("non-degenerate quartet")
}

/// Two-cluster fit of the quartet seeded at A and C.
pub fn quartet_fit(dataset: &Dataset) -> Fit {
    let init = Initialization::Fixed(vec![*dataset.point(0), *dataset.point(2)]);
    Engine::from_dataset(dataset, Config::new(2).with_init(init), rng(0))
        .expect("valid k")
        .cluster()
        .expect("fixed init matches k")
}

/// Three tight, well separated groups of `per` samples each.
pub fn blobs(per: usize, seed: u64) -> Dataset {
    const CENTERS: [(Feature, Feature); 3] = [(-0.2, 0.01), (0.4, 0.03), (1.2, 0.06)];
    let ref mut rng = rng(seed);
    CENTERS
        .iter()
        .flat_map(|&c| std::iter::repeat(c).take(per))
        .enumerate()
        .map(|(i, (g, v))| {
            Sample::new(
                format!("T{:03}", i),
                g + rng.random_range(-0.05..0.05),
                v + rng.random_range(-0.003..0.003),
            )
            .expect("valid sample")
        })
        .collect::<Vec<Sample>>()
        .try_into()
        .expect("non-degenerate blobs")
}
