//! Invariants checked on seeded random data over several sizes and strides.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strided_linalg::{Matrix, Vector};

const SIZES: [usize; 5] = [1, 2, 7, 64, 257];
const STRIDES: [isize; 3] = [1, 2, 3];

fn random_vector(rng: &mut StdRng, n: usize, scale: f64) -> Vector {
    Vector::from_fn(n, |_| (rng.gen::<f64>() * 2.0 - 1.0) * scale).unwrap()
}

/// Positions a stride-`stride` view from offset 0 covers in an owner of `len`.
fn covered(len: usize, stride: isize) -> Vec<usize> {
    (0..len).step_by(stride as usize).collect()
}

#[test]
fn test_reverse_twice_is_identity() {
    let mut rng = StdRng::seed_from_u64(1);
    for n in SIZES {
        for stride in STRIDES {
            let original = random_vector(&mut rng, n * stride as usize, 10.0);

            let mut x = original.clone();
            x.reverse().reverse();
            assert_eq!(x, original);

            x.view_mut(0, None, stride).unwrap().reverse().reverse();
            assert_eq!(x, original);

            // A single reverse through a view mirrors exactly the covered positions.
            x.view_mut(0, None, stride).unwrap().reverse();
            let positions = covered(x.len(), stride);
            for (k, &pos) in positions.iter().enumerate() {
                let mirror = positions[positions.len() - 1 - k];
                assert_eq!(x.get(pos as isize), original.get(mirror as isize));
            }
        }
    }
}

#[test]
fn test_add_then_sub_restores() {
    let mut rng = StdRng::seed_from_u64(2);
    for n in SIZES {
        for stride in STRIDES {
            let len = n * stride as usize;
            let a_owner = random_vector(&mut rng, len, 10.0);
            let b_owner = random_vector(&mut rng, len, 10.0);
            let a = a_owner.view(0, Some(n), stride).unwrap();
            let b = b_owner.view(stride as usize - 1, Some(n), stride).unwrap();

            let back = (&(&a + &b).unwrap() - &b).unwrap();
            assert_eq!(back.len(), n);
            for (x, y) in back.iter().zip(a.iter()) {
                assert_relative_eq!(x, y, epsilon = 1e-12);
            }

            let mut c = a.to_vector().unwrap();
            c.add_in_place(&b).unwrap().sub_in_place(&b).unwrap();
            for (x, y) in c.iter().zip(a.iter()) {
                assert_relative_eq!(x, y, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn test_sort_is_ordered_permutation() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in SIZES {
        for stride in STRIDES {
            let original = random_vector(&mut rng, n * stride as usize, 100.0);
            let mut x = original.clone();
            x.view_mut(0, None, stride).unwrap().sort();

            let sorted = x.view(0, None, stride).unwrap().to_vec();
            assert_eq!(sorted.len(), n);
            assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

            let mut expected = original.view(0, None, stride).unwrap().to_vec();
            expected.sort_by(f64::total_cmp);
            assert_eq!(sorted, expected);

            let positions = covered(x.len(), stride);
            for i in 0..x.len() {
                if !positions.contains(&i) {
                    assert_eq!(x.get(i as isize), original.get(i as isize));
                }
            }

            let once = x.clone();
            x.view_mut(0, None, stride).unwrap().sort();
            assert_eq!(x, once);
            assert_eq!(
                original.to_sorted().unwrap().to_sorted().unwrap(),
                original.to_sorted().unwrap()
            );
        }
    }
}

#[test]
fn test_copies_are_independent() {
    let mut rng = StdRng::seed_from_u64(4);
    for n in SIZES {
        let original = random_vector(&mut rng, n, 10.0);
        let snapshot = original.to_vec();

        let mut copy = original.clone();
        copy.mul_in_place(-2.0).unwrap();
        assert_eq!(original.to_vec(), snapshot);
        for (c, s) in copy.iter().zip(snapshot.iter()) {
            assert_eq!(c, -2.0 * s);
        }

        for stride in STRIDES {
            let mut from_view = original.view(0, None, stride).unwrap().to_vector().unwrap();
            from_view.fill(f64::NAN);
            assert_eq!(original.to_vec(), snapshot);
        }
    }

    for (rows, cols) in [(1, 1), (3, 5), (16, 9)] {
        let a = Matrix::random(rows, cols, &mut rng).unwrap();
        let before = a.clone();
        let mut copy = a.clone();
        copy.fill(-1.0);
        copy.set(-1, -1, 7.0).unwrap();
        assert_eq!(a, before);
    }
}

#[test]
fn test_transpose_twice_is_identity() {
    let mut rng = StdRng::seed_from_u64(5);
    for (rows, cols) in [(1, 1), (1, 7), (4, 3), (32, 17)] {
        let a = Matrix::random(rows, cols, &mut rng).unwrap();
        let t = a.transpose().unwrap();
        assert_eq!(t.shape(), (cols, rows));
        assert_eq!(t.transpose().unwrap(), a);
    }
    for n in [1, 2, 9] {
        let a = Matrix::random(n, n, &mut rng).unwrap();
        let mut b = a.clone();
        b.transpose_in_place().unwrap().transpose_in_place().unwrap();
        assert_eq!(b, a);
    }
}

#[test]
fn test_wrap_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(6);
    for n in SIZES {
        let original = random_vector(&mut rng, n, 100.0);
        for bound in [0.5, 1.0, 7.25] {
            let mut x = original.clone();
            let delta = x.wrap(bound).unwrap();
            for i in 0..n as isize {
                let r = x.get(i).unwrap();
                assert!((0.0..bound).contains(&r), "{r} not in [0, {bound})");
                let restored = r - delta.get(i).unwrap() * bound;
                assert_relative_eq!(restored, original.get(i).unwrap(), epsilon = 1e-9);
            }
        }
    }
}
