//! Stock ledger tests
//!
//! Tests for the derived stock model:
//! - balance is always SUM(entradas) - SUM(retiradas)
//! - a withdrawal above the current balance is refused and leaves no row
//! - deleting a movement reverses exactly its original contribution

use proptest::prelude::*;

/// A movement in the ledger, as the backend records it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Movimento {
    Entrada(i32),
    Retirada(i32),
}

/// Derived on-hand quantity: entradas minus retiradas
fn saldo(movimentos: &[Movimento]) -> i64 {
    movimentos.iter().fold(0i64, |acc, m| match m {
        Movimento::Entrada(q) => acc + i64::from(*q),
        Movimento::Retirada(q) => acc - i64::from(*q),
    })
}

/// Simulate recording a withdrawal with the insufficiency guard
fn registrar_retirada(movimentos: &mut Vec<Movimento>, quantidade: i32) -> Result<(), String> {
    if quantidade <= 0 {
        return Err("Quantity must be positive".to_string());
    }

    let disponivel = saldo(movimentos);
    if i64::from(quantidade) > disponivel {
        return Err(format!(
            "Estoque insuficiente: solicitado {}, disponível {}",
            quantidade, disponivel
        ));
    }

    movimentos.push(Movimento::Retirada(quantidade));
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// A product with no movements has zero stock
    #[test]
    fn test_saldo_sem_movimentos() {
        let movimentos: Vec<Movimento> = vec![];
        assert_eq!(saldo(&movimentos), 0);
    }

    /// Inbound 100 then outbound 30 leaves 70 on hand
    #[test]
    fn test_saldo_entrada_retirada() {
        let mut movimentos = vec![Movimento::Entrada(100)];
        registrar_retirada(&mut movimentos, 30).unwrap();

        assert_eq!(saldo(&movimentos), 70);
    }

    /// Balance across several movements follows the running sum
    #[test]
    fn test_saldo_varios_movimentos() {
        let movimentos = vec![
            Movimento::Entrada(50),
            Movimento::Entrada(30),
            Movimento::Retirada(20),
            Movimento::Entrada(10),
            Movimento::Retirada(15),
        ];

        // 50 + 30 - 20 + 10 - 15 = 55
        assert_eq!(saldo(&movimentos), 55);
    }

    /// A withdrawal above the balance is refused and nothing is recorded
    #[test]
    fn test_retirada_estoque_insuficiente() {
        let mut movimentos = vec![Movimento::Entrada(100), Movimento::Retirada(30)];
        assert_eq!(saldo(&movimentos), 70);

        let result = registrar_retirada(&mut movimentos, 1000);

        assert!(result.is_err());
        // No row persisted, balance unchanged
        assert_eq!(movimentos.len(), 2);
        assert_eq!(saldo(&movimentos), 70);
    }

    /// Withdrawing the exact balance is allowed and zeroes the stock
    #[test]
    fn test_retirada_saldo_exato() {
        let mut movimentos = vec![Movimento::Entrada(100)];
        registrar_retirada(&mut movimentos, 100).unwrap();

        assert_eq!(saldo(&movimentos), 0);
    }

    /// A withdrawal against an empty ledger is refused
    #[test]
    fn test_retirada_sem_estoque() {
        let mut movimentos: Vec<Movimento> = vec![];
        let result = registrar_retirada(&mut movimentos, 1);

        assert!(result.is_err());
        assert!(movimentos.is_empty());
    }

    /// Non-positive quantities are rejected
    #[test]
    fn test_quantidade_invalida() {
        let mut movimentos = vec![Movimento::Entrada(100)];

        assert!(registrar_retirada(&mut movimentos, 0).is_err());
        assert!(registrar_retirada(&mut movimentos, -10).is_err());
        assert_eq!(movimentos.len(), 1);
    }

    /// Deleting a movement changes the balance by exactly its reverse
    #[test]
    fn test_delete_reverte_contribuicao() {
        let mut movimentos = vec![
            Movimento::Entrada(100),
            Movimento::Retirada(30),
            Movimento::Entrada(25),
        ];
        let antes = saldo(&movimentos);

        // Delete the retirada; stock grows back by its quantity
        let removido = movimentos.remove(1);
        assert_eq!(removido, Movimento::Retirada(30));
        assert_eq!(saldo(&movimentos), antes + 30);

        // Delete an entrada; stock shrinks by its quantity
        let antes = saldo(&movimentos);
        let removido = movimentos.remove(0);
        assert_eq!(removido, Movimento::Entrada(100));
        assert_eq!(saldo(&movimentos), antes - 100);
    }

    /// The error carries both the requested and the available quantity
    #[test]
    fn test_erro_carrega_quantidades() {
        let mut movimentos = vec![Movimento::Entrada(70)];
        let err = registrar_retirada(&mut movimentos, 1000).unwrap_err();

        assert!(err.contains("1000"));
        assert!(err.contains("70"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating valid movement quantities
    fn quantidade_strategy() -> impl Strategy<Value = i32> {
        1i32..=10_000
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Balance equals total inbound minus total outbound, for any
        /// ledger where each withdrawal was valid at insertion time
        #[test]
        fn prop_saldo_igual_entradas_menos_saidas(
            entradas in prop::collection::vec(quantidade_strategy(), 1..20),
            retiradas in prop::collection::vec(quantidade_strategy(), 0..10)
        ) {
            let mut movimentos: Vec<Movimento> =
                entradas.iter().map(|q| Movimento::Entrada(*q)).collect();

            let total_entrada: i64 = entradas.iter().map(|q| i64::from(*q)).sum();
            let mut total_saida = 0i64;

            for q in &retiradas {
                if registrar_retirada(&mut movimentos, *q).is_ok() {
                    total_saida += i64::from(*q);
                }
            }

            prop_assert_eq!(saldo(&movimentos), total_entrada - total_saida);
        }

        /// The guard never lets the balance go negative
        #[test]
        fn prop_saldo_nunca_negativo(
            entradas in prop::collection::vec(quantidade_strategy(), 0..10),
            retiradas in prop::collection::vec(quantidade_strategy(), 0..20)
        ) {
            let mut movimentos: Vec<Movimento> =
                entradas.iter().map(|q| Movimento::Entrada(*q)).collect();

            for q in &retiradas {
                let _ = registrar_retirada(&mut movimentos, *q);
                prop_assert!(saldo(&movimentos) >= 0);
            }
        }

        /// A refused withdrawal leaves the ledger untouched
        #[test]
        fn prop_retirada_recusada_nao_persiste(
            entrada in quantidade_strategy(),
            excesso in quantidade_strategy()
        ) {
            let mut movimentos = vec![Movimento::Entrada(entrada)];
            let antes = movimentos.clone();

            // entrada + excesso always exceeds the balance
            let quantidade = entrada.saturating_add(excesso);
            let result = registrar_retirada(&mut movimentos, quantidade);

            prop_assert!(result.is_err());
            prop_assert_eq!(movimentos, antes);
        }

        /// Deleting any movement shifts the balance by its reverse
        #[test]
        fn prop_delete_reverte_exatamente(
            entradas in prop::collection::vec(quantidade_strategy(), 1..10),
            idx in 0usize..10
        ) {
            let mut movimentos: Vec<Movimento> =
                entradas.iter().map(|q| Movimento::Entrada(*q)).collect();
            let idx = idx % movimentos.len();

            let antes = saldo(&movimentos);
            let Movimento::Entrada(q) = movimentos.remove(idx) else {
                unreachable!()
            };

            prop_assert_eq!(saldo(&movimentos), antes - i64::from(q));
        }

        /// Recording withdrawals is order-insensitive for the final
        /// balance whenever every withdrawal succeeds
        #[test]
        fn prop_saldo_independe_da_ordem(
            entradas in prop::collection::vec(quantidade_strategy(), 1..10),
            mut retiradas in prop::collection::vec(1i32..=10, 0..5)
        ) {
            let total_entrada: i64 = entradas.iter().map(|q| i64::from(*q)).sum();
            let total_saida: i64 = retiradas.iter().map(|q| i64::from(*q)).sum();
            prop_assume!(total_saida <= total_entrada);

            let esperado = total_entrada - total_saida;

            let mut movimentos: Vec<Movimento> =
                entradas.iter().map(|q| Movimento::Entrada(*q)).collect();
            for q in &retiradas {
                registrar_retirada(&mut movimentos, *q).unwrap();
            }
            prop_assert_eq!(saldo(&movimentos), esperado);

            // Same withdrawals in reverse order reach the same balance
            let mut movimentos: Vec<Movimento> =
                entradas.iter().map(|q| Movimento::Entrada(*q)).collect();
            retiradas.reverse();
            for q in &retiradas {
                registrar_retirada(&mut movimentos, *q).unwrap();
            }
            prop_assert_eq!(saldo(&movimentos), esperado);
        }
    }
}
