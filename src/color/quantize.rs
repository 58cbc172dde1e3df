//! Vector quantization of the sampled color population
//!
//! Runs Lloyd's k-means with k-means++ initialization over the clamped pixel
//! population, treating each color as a 3-dimensional observation in 0-255
//! channel space and minimizing within-cluster squared Euclidean distance.
//!
//! Initialization is randomized; callers pin a seed for reproducible results
//! (tests do) and fall back to entropy seeding in production. A run that
//! somehow yields non-finite centroids is retried with a derived seed before
//! giving up.

use crate::constants::clustering::{CONVERGENCE_THRESHOLD, MAX_ITERATIONS, MAX_SEED_ATTEMPTS};
use crate::color::Rgb;
use crate::error::{PaletteError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A cluster centroid in 0-255 channel space
pub type Centroid = [f64; 3];

/// Cluster a color population into exactly `k` centroids
///
/// # Arguments
///
/// * `population` - clamped colors to cluster; treated as an unordered
///   multiset of observations
/// * `k` - number of centroids to produce
/// * `seed` - RNG seed for the k-means++ initialization; `None` seeds from
///   entropy
///
/// # Errors
///
/// * `InvalidRange` if `k` is zero
/// * `InsufficientColors` if the population holds fewer than `k` colors
///   (fail-fast: no degenerate partial palette is returned)
/// * `NumericInstability` if reseeded runs keep producing non-finite
///   centroids
pub fn cluster(population: &[Rgb], k: usize, seed: Option<u64>) -> Result<Vec<Centroid>> {
    if k == 0 {
        return Err(PaletteError::invalid_range(
            "num_colors",
            k,
            "at least one color is required",
        ));
    }
    if population.len() < k {
        return Err(PaletteError::InsufficientColors {
            requested: k,
            distinct: population.len(),
        });
    }

    let points: Vec<Centroid> = population
        .iter()
        .map(|c| [f64::from(c.r), f64::from(c.g), f64::from(c.b)])
        .collect();

    for attempt in 0..MAX_SEED_ATTEMPTS {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s.wrapping_add(u64::from(attempt))),
            None => StdRng::from_entropy(),
        };

        let centroids = lloyd(&points, k, &mut rng);
        if centroids.iter().flatten().all(|c| c.is_finite()) {
            return Ok(centroids);
        }
    }

    Err(PaletteError::NumericInstability {
        attempts: MAX_SEED_ATTEMPTS,
    })
}

/// Squared Euclidean distance between two observations
fn distance_sq(a: &Centroid, b: &Centroid) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

/// k-means++ seeding: spread initial centroids proportionally to squared
/// distance from the centroids already chosen
fn init_plus_plus(points: &[Centroid], k: usize, rng: &mut StdRng) -> Vec<Centroid> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..points.len())]);

    while centroids.len() < k {
        let weights: Vec<f64> = points
            .iter()
            .map(|p| {
                centroids
                    .iter()
                    .map(|c| distance_sq(p, c))
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();

        let total: f64 = weights.iter().sum();
        let next = if total > 0.0 {
            let mut threshold = rng.gen::<f64>() * total;
            let mut chosen = points.len() - 1;
            for (i, w) in weights.iter().enumerate() {
                threshold -= w;
                if threshold <= 0.0 {
                    chosen = i;
                    break;
                }
            }
            points[chosen]
        } else {
            // All remaining points coincide with a centroid; any pick works
            points[rng.gen_range(0..points.len())]
        };
        centroids.push(next);
    }

    centroids
}

/// Lloyd's iteration: alternate assignment and mean updates until centroids
/// stop moving or the iteration cap is hit
fn lloyd(points: &[Centroid], k: usize, rng: &mut StdRng) -> Vec<Centroid> {
    let mut centroids = init_plus_plus(points, k, rng);
    let mut assignments = vec![0usize; points.len()];

    for _ in 0..MAX_ITERATIONS {
        for (i, point) in points.iter().enumerate() {
            assignments[i] = nearest(point, &centroids);
        }

        let mut sums = vec![[0.0f64; 3]; k];
        let mut counts = vec![0usize; k];
        for (point, &cluster) in points.iter().zip(&assignments) {
            for (s, x) in sums[cluster].iter_mut().zip(point) {
                *s += x;
            }
            counts[cluster] += 1;
        }

        let mut movement = 0.0f64;
        for (cluster, centroid) in centroids.iter_mut().enumerate() {
            if counts[cluster] == 0 {
                continue;
            }
            let n = counts[cluster] as f64;
            let updated = [
                sums[cluster][0] / n,
                sums[cluster][1] / n,
                sums[cluster][2] / n,
            ];
            movement = movement.max(distance_sq(centroid, &updated));
            *centroid = updated;
        }

        // Respawn any emptied cluster on the point currently worst served
        // by its assigned centroid, and keep iterating
        for cluster in 0..k {
            if counts[cluster] == 0 {
                let farthest = farthest_point(points, &assignments, &centroids);
                centroids[cluster] = points[farthest];
                movement = f64::INFINITY;
            }
        }

        if movement < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    centroids
}

/// Index of the centroid nearest to `point`
fn nearest(point: &Centroid, centroids: &[Centroid]) -> usize {
    let mut best = 0;
    let mut best_d = f64::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let d = distance_sq(point, c);
        if d < best_d {
            best = i;
            best_d = d;
        }
    }
    best
}

/// Index of the point farthest from its assigned centroid
fn farthest_point(points: &[Centroid], assignments: &[usize], centroids: &[Centroid]) -> usize {
    let mut worst = 0;
    let mut worst_d = -1.0f64;
    for (i, point) in points.iter().enumerate() {
        let d = distance_sq(point, &centroids[assignments[i]]);
        if d > worst_d {
            worst = i;
            worst_d = d;
        }
    }
    worst
}
