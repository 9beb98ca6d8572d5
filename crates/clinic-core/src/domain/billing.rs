//! 청구 금액 계산기.
//!
//! 카탈로그 가격과 선금으로부터 청구서 상태를 유도하는 순수 함수.
//! 가격 조회(tarif)는 호출자의 책임이며, 가격이 없는 행위는
//! `NoPriceDefined` 에러로 처리됩니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 지불 상태.
///
/// (montant, avance)의 순수 함수입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub enum PaymentStatus {
    /// 선금 없음
    Pending,
    /// 일부 지불됨
    Partial,
    /// 전액 지불됨
    Paid,
}

impl PaymentStatus {
    /// 와이어 문자열 반환.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Paid => "Paid",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 청구 계산 결과.
///
/// 청구서 생성 시점의 가격 스냅샷입니다. 이후 카탈로그 가격이
/// 바뀌어도 재계산되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Billing {
    /// 총 청구 금액 (카탈로그 가격에서 복사)
    pub montant: Decimal,
    /// 선금
    pub avance: Decimal,
    /// 잔액 = max(0, montant - avance)
    pub reste: Decimal,
    /// 지불 상태
    pub etat: PaymentStatus,
}

/// 가격과 선금으로부터 청구 상태를 계산합니다.
///
/// 상태 결정 순서가 중요합니다: 선금이 0이면 잔액과 무관하게
/// 항상 `Pending`이고, 그 다음에 잔액으로 `Paid`/`Partial`을
/// 판정합니다. 선금이 가격을 초과해도 잔액은 0 밑으로 내려가지
/// 않습니다.
pub fn compute_billing(prix: Decimal, avance: Decimal) -> Billing {
    let montant = prix;
    let reste = (montant - avance).max(Decimal::ZERO);

    let etat = if avance.is_zero() {
        PaymentStatus::Pending
    } else if reste <= Decimal::ZERO {
        PaymentStatus::Paid
    } else {
        PaymentStatus::Partial
    };

    Billing {
        montant,
        avance,
        reste,
        etat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_advance_is_pending() {
        let billing = compute_billing(dec!(100), dec!(0));
        assert_eq!(billing.montant, dec!(100));
        assert_eq!(billing.avance, dec!(0));
        assert_eq!(billing.reste, dec!(100));
        assert_eq!(billing.etat, PaymentStatus::Pending);
    }

    #[test]
    fn test_full_advance_is_paid() {
        let billing = compute_billing(dec!(100), dec!(100));
        assert_eq!(billing.reste, dec!(0));
        assert_eq!(billing.etat, PaymentStatus::Paid);
    }

    #[test]
    fn test_partial_advance_is_partial() {
        let billing = compute_billing(dec!(100), dec!(40));
        assert_eq!(billing.reste, dec!(60));
        assert_eq!(billing.etat, PaymentStatus::Partial);
    }

    #[test]
    fn test_overpayment_floors_at_zero() {
        let billing = compute_billing(dec!(100), dec!(150));
        assert_eq!(billing.reste, dec!(0));
        assert_eq!(billing.etat, PaymentStatus::Paid);
    }

    #[test]
    fn test_zero_advance_on_free_act_is_still_pending() {
        // 선금 0 검사가 Paid 검사보다 먼저 적용됨
        let billing = compute_billing(dec!(0), dec!(0));
        assert_eq!(billing.etat, PaymentStatus::Pending);
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(PaymentStatus::Pending.as_str(), "Pending");
        assert_eq!(PaymentStatus::Partial.to_string(), "Partial");
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Paid).unwrap(),
            "\"Paid\""
        );
    }

    proptest! {
        /// 잔액 불변식: reste = max(0, montant - avance)
        #[test]
        fn prop_reste_never_negative(prix in 0u64..1_000_000, avance in 0u64..1_000_000) {
            let billing = compute_billing(Decimal::from(prix), Decimal::from(avance));
            prop_assert!(billing.reste >= Decimal::ZERO);
            prop_assert_eq!(
                billing.reste,
                (Decimal::from(prix) - Decimal::from(avance)).max(Decimal::ZERO)
            );
        }

        /// 상태는 (montant, avance)의 전함수이며 계산은 멱등
        #[test]
        fn prop_compute_is_idempotent(prix in 0u64..1_000_000, avance in 0u64..1_000_000) {
            let a = compute_billing(Decimal::from(prix), Decimal::from(avance));
            let b = compute_billing(Decimal::from(prix), Decimal::from(avance));
            prop_assert_eq!(a, b);
        }

        /// 선금 0은 항상 Pending
        #[test]
        fn prop_zero_advance_pending(prix in 0u64..1_000_000) {
            let billing = compute_billing(Decimal::from(prix), Decimal::ZERO);
            prop_assert_eq!(billing.etat, PaymentStatus::Pending);
        }
    }
}
