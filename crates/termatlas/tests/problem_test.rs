//! Integration tests for DP problems and their graph synchronization

use std::sync::Arc;

use termatlas::{
    DependencyPair, Digraph, FunctionSymbol, IntegerExpression, Position, Problem, Term, Trs,
    Type, VariablePool,
};

/// `f#(cons(x)) ⇒ g#(x)` style pairs over a small sharp-marked signature
struct ProblemBuilder {
    pool: VariablePool,
    trs: Arc<Trs>,
    cons: FunctionSymbol,
    dp_sort: Type,
}

impl ProblemBuilder {
    fn new() -> ProblemBuilder {
        let o = Type::sort("o");
        let cons = FunctionSymbol::new("cons", Type::arrow(o.clone(), o.clone()));
        let trs = Arc::new(Trs::new([cons.clone()], Vec::new()));
        ProblemBuilder {
            pool: VariablePool::new(),
            trs,
            cons,
            dp_sort: Type::sort("dp"),
        }
    }

    fn sharp(&self, name: &str) -> FunctionSymbol {
        let o = Type::sort("o");
        FunctionSymbol::new(name, Type::arrow(o, self.dp_sort.clone()))
    }

    fn dp(&mut self, left: &str, right: &str) -> DependencyPair {
        let o = Type::sort("o");
        let x = self.pool.fresh_free("x", o);
        let lhs = Term::FnApp(
            self.sharp(left),
            vec![Term::FnApp(self.cons.clone(), vec![Term::Var(x)])],
        );
        let rhs = Term::FnApp(self.sharp(right), vec![Term::Var(x)]);
        DependencyPair::new(lhs, rhs)
    }
}

#[test]
fn removal_sequence_keeps_graph_in_lockstep() {
    let mut builder = ProblemBuilder::new();
    let dps = vec![
        builder.dp("a#", "b#"),
        builder.dp("b#", "c#"),
        builder.dp("c#", "d#"),
        builder.dp("d#", "e#"),
        builder.dp("e#", "a#"),
    ];
    let mut graph = Digraph::new(5);
    for i in 0..5 {
        graph.add_edge(i, (i + 1) % 5).unwrap();
    }
    let mut problem = Problem::with_graph(dps, builder.trs.clone(), graph).unwrap();

    for index in [3, 0, 2, 0] {
        let before = problem.dps()[index].clone();
        let removed = problem.remove_dp(index).unwrap();
        assert_eq!(removed, before);
        assert_eq!(
            problem.graph().unwrap().vertex_count(),
            problem.dps().len()
        );
    }
    assert_eq!(problem.dps().len(), 1);
}

#[test]
fn splitting_along_components_preserves_lockstep() {
    let mut builder = ProblemBuilder::new();
    let dps = vec![
        builder.dp("a#", "b#"),
        builder.dp("b#", "a#"),
        builder.dp("c#", "d#"),
        builder.dp("d#", "c#"),
    ];
    // two components: {0, 1} and {2, 3}, plus a bridge 1 → 2
    let mut graph = Digraph::new(4);
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 0).unwrap();
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(2, 3).unwrap();
    graph.add_edge(3, 2).unwrap();
    let problem = Problem::with_graph(dps.clone(), builder.trs.clone(), graph).unwrap();

    let first = problem.subproblem(&[0, 1]).unwrap();
    let second = problem.subproblem(&[2, 3]).unwrap();

    assert_eq!(first.dps(), &dps[0..2]);
    assert_eq!(second.dps(), &dps[2..4]);
    for sub in [&first, &second] {
        let graph = sub.graph().unwrap();
        assert_eq!(graph.vertex_count(), sub.dps().len());
        assert_eq!(graph.has_edge(0, 1), Ok(true));
        assert_eq!(graph.has_edge(1, 0), Ok(true));
        // the bridge edge did not survive the split
        assert_eq!(graph.edge_count(), 2);
    }

    // the original problem is untouched
    assert_eq!(problem.dps().len(), 4);
    assert_eq!(problem.graph().unwrap().vertex_count(), 4);
}

#[test]
fn sharp_heads_on_a_mixed_signature() {
    let mut builder = ProblemBuilder::new();
    let dps = vec![builder.dp("f#", "f#")];
    let problem = Problem::new(dps, builder.trs.clone());

    // the pairs mention f# (output sort dp) and cons (output sort o)
    let heads = problem.sharp_heads(&Type::sort("dp"));
    let names: Vec<&str> = heads.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["f#"]);
}

#[test]
fn core_values_serialize() {
    let pos = Position::argument(1, Position::lambda(Position::meta(2, Position::empty())));
    let json = serde_json::to_string(&pos).unwrap();
    let back: Position = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pos);

    let expr = IntegerExpression::add_all(vec![
        IntegerExpression::Value(-3),
        IntegerExpression::mul(IntegerExpression::Var(0), IntegerExpression::Value(7)),
    ]);
    let json = serde_json::to_string(&expr).unwrap();
    let back: IntegerExpression = serde_json::from_str(&json).unwrap();
    assert_eq!(back, expr);
    assert_eq!(back.to_string(), "(+ (- 3) (* i0 7))");
}
