#![cfg(test)]
use academia_core::domain::models::describe::{DescribeChain, Printable, ReportDescription, Serializable};

#[test]
fn base_order_decides_the_winner() {
    let left = DescribeChain::new(7, vec![Box::new(Printable), Box::new(Serializable)]);
    let right = DescribeChain::new(7, vec![Box::new(Serializable), Box::new(Printable)]);
    assert_eq!(left.describe(), "Printable object with id 7");
    assert_eq!(right.describe(), "Serializable object with id 7");
}

#[test]
fn own_description_beats_every_base() {
    let chain = DescribeChain::new(8, vec![Box::new(Serializable)]).with_override(Box::new(ReportDescription));
    assert_eq!(chain.describe(), "Report object with id 8");
}
