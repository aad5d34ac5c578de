//! Algebraic laws checked over random inputs.

use microla::{LinalgError, Matrix, Vector};
use proptest::prelude::*;

fn elements(n: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0f64..100.0, n)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_commutes(pair in (1usize..16).prop_flat_map(|n| (elements(n), elements(n)))) {
        let (mut a, mut b) = pair;
        let n = a.len();
        let (mut o1, mut o2) = (vec![0.0; n], vec![0.0; n]);
        let v = Vector::new(&mut a);
        let w = Vector::new(&mut b);
        let mut vw = Vector::new(&mut o1);
        let mut wv = Vector::new(&mut o2);
        v.add(&w, &mut vw).unwrap();
        w.add(&v, &mut wv).unwrap();
        prop_assert_eq!(vw.as_slice(), wv.as_slice());
    }

    #[test]
    fn sub_undoes_add(pair in (1usize..16).prop_flat_map(|n| (elements(n), elements(n)))) {
        let (mut a, mut b) = pair;
        let n = a.len();
        let (mut s, mut d) = (vec![0.0; n], vec![0.0; n]);
        let v = Vector::new(&mut a);
        let w = Vector::new(&mut b);
        let mut sum = Vector::new(&mut s);
        let mut back = Vector::new(&mut d);
        v.add(&w, &mut sum).unwrap();
        sum.sub(&w, &mut back).unwrap();
        for (x, y) in back.iter().zip(v.iter()) {
            prop_assert!((x - y).abs() < 1e-9, "{} vs {}", x, y);
        }
    }

    #[test]
    fn unit_vector_has_unit_norm(mut a in elements(6)) {
        let mut v = Vector::new(&mut a);
        let was_zero = v.sum_of_squares() == 0.0;
        v.to_unit();
        if was_zero {
            prop_assert_eq!(v[0], 1.0);
        } else {
            prop_assert!((v.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn dot_self_is_squared_norm(mut a in elements(8)) {
        let v = Vector::new(&mut a);
        let d = v.dot(&v).unwrap();
        prop_assert_eq!(d, v.sum_of_squares());
        let n = v.norm();
        prop_assert!((d - n * n).abs() <= 1e-9 * d.max(1.0));
    }

    #[test]
    fn cross_anticommutes(mut a in elements(3), mut b in elements(3)) {
        let (mut o1, mut o2) = ([0.0; 3], [0.0; 3]);
        let v = Vector::new(&mut a);
        let w = Vector::new(&mut b);
        let mut vw = Vector::new(&mut o1);
        let mut wv = Vector::new(&mut o2);
        v.cross(&w, &mut vw).unwrap();
        w.cross(&v, &mut wv).unwrap();
        wv.negate();
        prop_assert_eq!(vw.as_slice(), wv.as_slice());
    }

    #[test]
    fn two_by_two_determinant(mut a in elements(4)) {
        let expected = a[0] * a[3] - a[1] * a[2];
        let m = Matrix::new(2, 2, &mut a).unwrap();
        prop_assert_eq!(m.determinant().unwrap(), expected);
    }

    #[test]
    fn transpose_is_an_involution(
        shape in (1usize..6, 1usize..6),
        seed in any::<u64>(),
    ) {
        let (r, c) = shape;
        let (mut a, mut t, mut tt) = (vec![0.0; r * c], vec![0.0; r * c], vec![0.0; r * c]);
        let a = Matrix::with_init(r, c, &mut a, microla::Init::Random { seed }).unwrap();
        let mut t = Matrix::new(c, r, &mut t).unwrap();
        let mut tt = Matrix::new(r, c, &mut tt).unwrap();
        a.transpose(&mut t).unwrap();
        t.transpose(&mut tt).unwrap();
        prop_assert!(a == tt);
    }

    #[test]
    fn inverse_times_matrix_is_identity(mut a in elements(9)) {
        // push the diagonal away from zero so the matrix is well conditioned
        for i in 0..3 {
            a[i * 4] += 400.0_f64.copysign(a[i * 4]);
        }
        let mut i_buf = [0.0; 9];
        let mut p_buf = [0.0; 9];
        let m = Matrix::new(3, 3, &mut a).unwrap();
        let mut inv = Matrix::new(3, 3, &mut i_buf).unwrap();
        let mut prod = Matrix::new(3, 3, &mut p_buf).unwrap();
        m.inverse(&mut inv).unwrap();
        m.mul(&inv, &mut prod).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                prop_assert!((prod[(r, c)] - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn rank_one_matrix_is_singular(mut u in elements(3), mut v in elements(3)) {
        // outer product of integers keeps the cofactor arithmetic exact
        for x in u.iter_mut().chain(v.iter_mut()) {
            *x = x.round();
        }
        let mut a = [0.0; 9];
        let mut m = Matrix::new(3, 3, &mut a).unwrap();
        m.init_with(|i, j| u[i] * v[j]);
        let mut out = [0.0; 9];
        let mut inv = Matrix::new(3, 3, &mut out).unwrap();
        prop_assert_eq!(m.inverse(&mut inv).unwrap_err(), LinalgError::Singular);
    }

    #[test]
    fn eigenvalues_sum_to_trace_by_magnitude(mut a in elements(16)) {
        let mut s = [0.0; 16];
        let (mut vals, mut vecs) = ([0.0; 4], [0.0; 16]);
        let r = Matrix::new(4, 4, &mut a).unwrap();
        let mut sym = Matrix::new(4, 4, &mut s).unwrap();
        sym.init_with(|i, j| r[(i, j)] + r[(j, i)]);
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(4, 4, &mut vecs).unwrap();
        sym.eigen(&mut values, &mut q).unwrap();

        let trace: f64 = (0..4).map(|i| sym[(i, i)]).sum();
        let total: f64 = values.iter().sum();
        prop_assert!((trace - total).abs() < 1e-8 * trace.abs().max(1.0));
        for k in 0..3 {
            prop_assert!(values[k].abs() >= values[k + 1].abs());
        }
    }
}
