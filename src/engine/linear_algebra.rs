/*!
Linear algebra over GF(2), on polynomials.

A collection of polynomials is viewed as the rows of a matrix, whose columns are the monomials occurring in some polynomial, in decreasing order.
Row reduction of the matrix is then reduction of the polynomials by each other, where only polynomials with the same leading monomial are added.

The reduced rows span the same space as the original rows, and each reduced row has a distinct leading monomial which occurs in no other row.
*/

use crate::ring::{monomial::Monomial, polynomial::Polynomial, BooleRing};

/// Reduces the given polynomials to reduced row echelon form, with zero rows removed.
///
/// The rows are returned in decreasing order of leading monomial.
pub fn row_reduce(ring: &BooleRing, rows: Vec<Polynomial>) -> Vec<Polynomial> {
    let mut pivots: Vec<Polynomial> = Vec::with_capacity(rows.len());

    for mut row in rows {
        while let Some(lead) = row.lead() {
            match pivots.iter().find(|pivot| pivot.lead() == Some(lead)) {
                Some(pivot) => row = ring.add(&row, pivot),
                None => {
                    pivots.push(row);
                    break;
                }
            }
        }
    }

    pivots.sort_by(|a, b| ring.compare(b, a));

    for i in 0..pivots.len() {
        let Some(lead) = pivots[i].lead().cloned() else {
            continue;
        };
        for j in 0..pivots.len() {
            if i != j && pivots[j].terms().contains(&lead) {
                pivots[j] = ring.add(&pivots[j], &pivots[i]);
            }
        }
    }

    pivots
}

/// A drawing of the matrix of some rows, with a row of `0`s and `1`s for each polynomial.
pub fn draw(ring: &BooleRing, rows: &[Polynomial]) -> String {
    let mut columns: Vec<Monomial> = Vec::default();
    for row in rows {
        for term in row.terms() {
            if !columns.contains(term) {
                columns.push(term.clone());
            }
        }
    }
    columns.sort_by(|a, b| ring.order().compare(b, a));

    let mut drawing = String::default();
    for row in rows {
        for column in &columns {
            match row.terms().contains(column) {
                true => drawing.push('1'),
                false => drawing.push('0'),
            }
        }
        drawing.push('\n');
    }
    drawing
}

#[cfg(test)]
mod linear_algebra_tests {
    use super::*;
    use crate::ring::order::MonomialOrder;

    #[test]
    fn reduced_echelon() {
        let ring = BooleRing::new(3, MonomialOrder::DegLex).unwrap();
        let x0 = ring.variable(0).unwrap();
        let x1 = ring.variable(1).unwrap();
        let x2 = ring.variable(2).unwrap();

        let rows = vec![
            ring.add(&x0, &x1),
            ring.add(&ring.add(&x0, &x1), &x2),
            ring.add(&x1, &x2),
        ];

        let reduced = row_reduce(&ring, rows);
        assert_eq!(reduced, vec![x0, x1, x2]);
    }

    #[test]
    fn dependent_rows_vanish() {
        let ring = BooleRing::new(2, MonomialOrder::DegLex).unwrap();
        let x0 = ring.variable(0).unwrap();
        let x1 = ring.variable(1).unwrap();
        let sum = ring.add(&x0, &x1);

        let reduced = row_reduce(&ring, vec![x0.clone(), x1.clone(), sum]);
        assert_eq!(reduced.len(), 2);

        assert_eq!(draw(&ring, &[x0, x1]), "10\n01\n");
    }
}
