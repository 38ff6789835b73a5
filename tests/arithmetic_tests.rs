use findec::{Decimal, DecimalError};

fn dec(s: &str) -> Decimal {
    Decimal::must_parse(s)
}

// ============ Addition / Subtraction ============
#[test]
fn test_add_scale_alignment() {
    assert_eq!(dec("1.5").add(&dec("2.55")).to_string(), "4.05");
    assert_eq!(dec("0.1").add(&dec("0.2")).to_string(), "0.3");
    assert_eq!(dec("1").add(&dec("0.0000000000000000001")).to_string(), "1.0000000000000000001");
}

#[test]
fn test_add_mixed_signs() {
    assert_eq!(dec("1.5").add(&dec("-0.5")).to_string(), "1");
    assert_eq!(dec("-1.5").add(&dec("0.5")).to_string(), "-1");
    assert_eq!(dec("1.5").add(&dec("-2.5")).to_string(), "-1");
    assert_eq!(dec("1.5").add(&dec("-1.5")).to_string(), "0");
}

#[test]
fn test_sub() {
    assert_eq!(dec("5").sub(&dec("2.5")).to_string(), "2.5");
    assert_eq!(dec("2.5").sub(&dec("5")).to_string(), "-2.5");
    assert_eq!(dec("-2.5").sub(&dec("-5")).to_string(), "2.5");
    assert_eq!(dec("1").sub(&dec("1.000")).to_string(), "0");
}

#[test]
fn test_add_sub_never_truncate() {
    // full 19-digit scales survive addition untouched
    let a = dec("0.0000000000000000001");
    let b = dec("123.4");
    assert_eq!(b.add(&a).to_string(), "123.4000000000000000001");
    assert_eq!(b.add(&a).sub(&a), b);
}

#[test]
fn test_add_promotes_instead_of_overflowing() {
    let a = dec("9999999999999999999.9999999999999999999");
    let sum = a.add(&a);
    assert_eq!(sum.to_string(), "19999999999999999999.9999999999999999998");
}

#[test]
fn test_sign_symmetry() {
    for (x, y) in [("1.5", "2.25"), ("0.001", "123"), ("7", "0.5")] {
        let a = dec(x);
        let b = dec(y);
        // (-a) + b == -(a + (-b))
        let lhs = (-a.clone()).add(&b);
        let rhs = -(a.add(&-b.clone()));
        assert_eq!(lhs, rhs, "{} {}", x, y);
        // (-a) * b == -(a * b)
        assert_eq!((-a.clone()).mul(&b), -(a.mul(&b)), "{} {}", x, y);
    }
}

// ============ Multiplication ============
#[test]
fn test_mul_basic() {
    assert_eq!(dec("0.5").mul(&dec("0.5")).to_string(), "0.25");
    assert_eq!(dec("-1.5").mul(&dec("1.5")).to_string(), "-2.25");
    assert_eq!(dec("12.34").mul(&dec("0")).to_string(), "0");
    assert_eq!(dec("12.34").mul(&Decimal::ONE).to_string(), "12.34");
}

#[test]
fn test_mul_identity_and_zero() {
    for s in ["0.123", "-99.5", "1234567890123456789012345678901234567890"] {
        let a = dec(s);
        assert_eq!(a.mul(&Decimal::ONE), a);
        assert_eq!(a.mul(&Decimal::ZERO), Decimal::ZERO);
    }
}

#[test]
fn test_mul_scale_adds() {
    let a = dec("0.123456789012345678"); // scale 18
    let b = dec("0.1");
    assert_eq!(a.mul(&b).to_string(), "0.0123456789012345678");
}

#[test]
fn test_mul_truncates_past_max_scale() {
    // scale 19 + 1 = 20 exceeds the cap; low digit drops toward zero
    let a = dec("0.1234567890123456789");
    let b = dec("0.1");
    assert_eq!(a.mul(&b).to_string(), "0.0123456789012345678");

    // a tiny product collapses to zero
    let t = dec("0.0000000001"); // 1e-10
    assert_eq!(t.mul(&t).to_string(), "0");
}

// ============ Division ============
#[test]
fn test_div_basic() {
    assert_eq!(dec("1").div(&dec("3")).unwrap().to_string(), "0.3333333333333333333");
    assert_eq!(dec("1").div(&dec("8")).unwrap().to_string(), "0.125");
    assert_eq!(dec("10").div(&dec("2")).unwrap().to_string(), "5");
    assert_eq!(dec("-6").div(&dec("2")).unwrap().to_string(), "-3");
    assert_eq!(dec("7").div(&dec("0.5")).unwrap().to_string(), "14");
    assert_eq!(dec("0").div(&dec("3")).unwrap(), Decimal::ZERO);
}

#[test]
fn test_div_by_zero() {
    assert_eq!(dec("1.23").div(&Decimal::ZERO), Err(DecimalError::DivideByZero));
    assert_eq!(dec("0").div(&Decimal::ZERO), Err(DecimalError::DivideByZero));
}

#[test]
fn test_div_trims_trailing_zeros() {
    let q = dec("2").div(&dec("4")).unwrap();
    assert_eq!(q.scale(), 1);
    assert_eq!(q.to_string(), "0.5");
}

#[test]
fn test_div_wide_divisor() {
    // divisor coefficient above 2^64 drives the two-word division step
    let q = dec("8000000000000000002")
        .div(&dec("2000000000000000000.5"))
        .unwrap();
    assert_eq!(q.to_string(), "4");

    let q = dec("8000000000000000003")
        .div(&dec("2000000000000000000.5"))
        .unwrap();
    assert_eq!(q.to_string(), "4.0000000000000000004");
}

#[test]
fn test_div_wide_dividend_small_divisor() {
    // a dividend past 128 bits with a one-word divisor takes the
    // short-division ladder
    let q = dec("9999999999999999999.123").div(&dec("0.3")).unwrap();
    assert_eq!(q.to_string(), "33333333333333333330.41");
}

#[test]
fn test_div_big_operands() {
    let a = dec("1234567890123456789012345678901234567890");
    assert_eq!(a.div(&a).unwrap().to_string(), "1");
    let q = a.div(&dec("2")).unwrap();
    assert_eq!(q.to_string(), "617283945061728394506172839450617283945");
}

#[test]
fn test_div_residual_bound() {
    // |a - q*b| < 10^-19 * |b|; integer divisors keep q*b exact here
    let ulp = dec("0.0000000000000000001");
    for (x, y) in [("1", "3"), ("22", "7"), ("5.5", "-13"), ("0.001", "7")] {
        let a = dec(x);
        let b = dec(y);
        let q = a.div(&b).unwrap();
        let residual = a.sub(&q.mul(&b)).abs();
        assert!(residual < b.abs().mul(&ulp), "{} / {}", x, y);
    }
}

// ============ QuoRem / Rem ============
#[test]
fn test_quo_rem_identity() {
    for (x, y) in [
        ("7.5", "2"),
        ("-7.5", "2"),
        ("7.5", "-2"),
        ("-7.5", "-2"),
        ("0.003", "0.002"),
        ("100", "3"),
        ("1234567890123456789012345678901234567890", "7"),
    ] {
        let a = dec(x);
        let b = dec(y);
        let (q, r) = a.quo_rem(&b).unwrap();
        assert_eq!(q.scale(), 0, "{} {}", x, y);
        assert_eq!(q.mul(&b).add(&r), a, "{} {}", x, y);
        assert!(r.is_zero() || r.is_neg() == a.is_neg(), "{} {}", x, y);
    }
}

#[test]
fn test_quo_rem_values() {
    let (q, r) = dec("7.5").quo_rem(&dec("2")).unwrap();
    assert_eq!(q.to_string(), "3");
    assert_eq!(r.to_string(), "1.5");

    let (q, r) = dec("-7.5").quo_rem(&dec("2")).unwrap();
    assert_eq!(q.to_string(), "-3");
    assert_eq!(r.to_string(), "-1.5");
}

#[test]
fn test_rem() {
    assert_eq!(dec("7.5").rem(&dec("2")).unwrap().to_string(), "1.5");
    assert_eq!(dec("-7.5").rem(&dec("2")).unwrap().to_string(), "-1.5");
    assert_eq!(dec("1").rem(&Decimal::ZERO), Err(DecimalError::DivideByZero));
}

// ============ u64 Specializations ============
#[test]
fn test_u64_specializations() {
    let a = dec("1.5");
    assert_eq!(a.add64(2).to_string(), "3.5");
    assert_eq!(a.sub64(2).to_string(), "-0.5");
    assert_eq!(a.mul64(4).to_string(), "6");
    assert_eq!(a.div64(3).unwrap().to_string(), "0.5");
    assert_eq!(a.div64(0), Err(DecimalError::DivideByZero));
}
