use std::collections::HashSet;

use swap_router::errors::RouterError;
use swap_router::{
    assemble, CodeHash, ContractAddress, Router, RouterBuilder, RouterHop, RouterPair, Token,
    TokenIdentity,
};

fn token(symbol: &str) -> Token {
    Token::Custom {
        contract_addr: ContractAddress::new(format!("secret1{}", symbol.to_lowercase())).unwrap(),
        token_code_hash: CodeHash::new(&hex::encode([0xAB; 32])).unwrap(),
    }
}

fn scrt() -> Token {
    Token::native("uscrt")
}

fn pair(from: Token, into: Token) -> RouterPair {
    let pool = format!("secret1pool-{}-{}", from, into);
    RouterPair::new(
        from,
        into,
        ContractAddress::new(pool).unwrap(),
        CodeHash::new(&hex::encode([0xCD; 32])).unwrap(),
    )
}

fn pool_of(from: &str, into: &str) -> String {
    format!("secret1pool-secret1{}-secret1{}", from.to_lowercase(), into.to_lowercase())
}

fn pools(hops: &[RouterHop]) -> Vec<String> {
    hops.iter().map(|hop| hop.pool_address.to_string()).collect()
}

fn offered(hops: &[RouterHop]) -> Vec<Token> {
    hops.iter().map(|hop| hop.offered_token.clone()).collect()
}

fn five_pairs() -> Vec<RouterPair> {
    vec![
        pair(token("SSCRT"), token("SIENNA")),
        pair(token("SIENNA"), token("SHD")),
        pair(token("SHD"), token("ETH")),
        pair(token("ETH"), token("BTC")),
        pair(token("SHD"), token("BTC")),
    ]
}

/// Fewest hops between two tokens by exhaustive search over simple paths,
/// never passing through native currency.
fn brute_force_hops(pairs: &[RouterPair], from: &TokenIdentity, into: &TokenIdentity) -> Option<usize> {
    fn walk(
        pairs: &[RouterPair],
        node: &TokenIdentity,
        into: &TokenIdentity,
        visited: &mut HashSet<TokenIdentity>,
        depth: usize,
        best: &mut Option<usize>,
    ) {
        if node == into {
            *best = Some(best.map_or(depth, |b| b.min(depth)));
            return;
        }
        if depth > 0 && node.is_native() {
            return;
        }
        for p in pairs {
            let [a, b] = p.identities();
            let next = if a == *node {
                b
            } else if b == *node {
                a
            } else {
                continue;
            };
            if visited.insert(next.clone()) {
                walk(pairs, &next, into, visited, depth + 1, best);
                visited.remove(&next);
            }
        }
    }

    let mut visited = HashSet::from([from.clone()]);
    let mut best = None;
    walk(pairs, from, into, &mut visited, 0, &mut best);
    best
}

#[test]
fn test_takes_direct_shortcut() {
    let hops = assemble(&five_pairs(), &token("SSCRT"), &token("BTC")).unwrap();

    assert_eq!(
        pools(&hops),
        vec![
            pool_of("SSCRT", "SIENNA"),
            pool_of("SIENNA", "SHD"),
            pool_of("SHD", "BTC"),
        ]
    );
    assert_eq!(offered(&hops), vec![token("SSCRT"), token("SIENNA"), token("SHD")]);
}

#[test]
fn test_reverse_direction_is_exact_reverse() {
    let pairs = five_pairs();
    let forward = assemble(&pairs, &token("SSCRT"), &token("BTC")).unwrap();
    let backward = assemble(&pairs, &token("BTC"), &token("SSCRT")).unwrap();

    assert_eq!(
        pools(&backward),
        vec![
            pool_of("SHD", "BTC"),
            pool_of("SIENNA", "SHD"),
            pool_of("SSCRT", "SIENNA"),
        ]
    );
    assert_eq!(offered(&backward), vec![token("BTC"), token("SHD"), token("SIENNA")]);

    let mut reversed_pools = pools(&forward);
    reversed_pools.reverse();
    assert_eq!(pools(&backward), reversed_pools);
}

#[test]
fn test_native_pairs_never_bridge_mid_route() {
    let pairs = vec![
        pair(token("SSCRT"), token("JKWON")),
        pair(token("JKWON"), scrt()),
        pair(scrt(), token("BTC")),
        pair(token("SSCRT"), token("SIENNA")),
        pair(token("SIENNA"), token("SHD")),
        pair(token("SHD"), token("ETH")),
        pair(token("ETH"), token("BTC")),
    ];

    let hops = assemble(&pairs, &token("SSCRT"), &token("BTC")).unwrap();

    assert_eq!(hops.len(), 4);
    assert_eq!(
        pools(&hops),
        vec![
            pool_of("SSCRT", "SIENNA"),
            pool_of("SIENNA", "SHD"),
            pool_of("SHD", "ETH"),
            pool_of("ETH", "BTC"),
        ]
    );
    assert!(hops.iter().all(|hop| !hop.offered_token.is_native()));
}

#[test]
fn test_native_endpoints_still_route() {
    let pairs = vec![
        pair(token("SSCRT"), token("JKWON")),
        pair(token("JKWON"), scrt()),
        pair(scrt(), token("BTC")),
    ];

    let hops = assemble(&pairs, &scrt(), &token("SSCRT")).unwrap();
    assert_eq!(offered(&hops), vec![scrt(), token("JKWON")]);

    let hops = assemble(&pairs, &token("SSCRT"), &scrt()).unwrap();
    assert_eq!(offered(&hops), vec![token("SSCRT"), token("JKWON")]);
}

#[test]
fn test_empty_and_same_token_inputs() {
    assert_eq!(
        assemble(&[], &token("SSCRT"), &token("BTC")),
        Err(RouterError::NoPairsProvided)
    );
    assert_eq!(
        assemble(&[], &token("SSCRT"), &token("SSCRT")),
        Err(RouterError::NoPairsProvided)
    );

    let pairs = five_pairs();
    for t in [token("SSCRT"), token("BTC"), token("UNLISTED"), scrt()] {
        assert_eq!(
            assemble(&pairs, &t, &t),
            Err(RouterError::SameToken { token: t.identity() })
        );
    }
}

#[test]
fn test_disconnected_graph() {
    let pairs = vec![
        pair(token("SSCRT"), token("SIENNA")),
        pair(token("ETH"), token("BTC")),
    ];

    let result = assemble(&pairs, &token("SSCRT"), &token("BTC"));
    assert_eq!(
        result,
        Err(RouterError::NoRouteFound {
            from: token("SSCRT").identity(),
            into: token("BTC").identity(),
        })
    );
}

#[test]
fn test_deterministic_for_fixed_input() {
    let pairs = five_pairs();
    let router = RouterBuilder::new().build().unwrap();

    let first = router.assemble(&pairs, &token("SSCRT"), &token("ETH")).unwrap();
    for _ in 0..10 {
        assert_eq!(router.assemble(&pairs, &token("SSCRT"), &token("ETH")).unwrap(), first);
    }
}

#[test]
fn test_routes_are_shortest_and_native_safe() {
    let mut pairs = five_pairs();
    pairs.extend([
        pair(token("SSCRT"), token("JKWON")),
        pair(token("JKWON"), scrt()),
        pair(scrt(), token("BTC")),
        pair(token("ATOM"), scrt()),
        pair(token("ATOM"), token("ETH")),
    ]);

    let tokens = [
        token("SSCRT"),
        token("SIENNA"),
        token("SHD"),
        token("ETH"),
        token("BTC"),
        token("JKWON"),
        token("ATOM"),
        scrt(),
    ];
    let router = Router::default();

    for from in &tokens {
        for into in &tokens {
            if from == into {
                continue;
            }
            let expected = brute_force_hops(&pairs, &from.identity(), &into.identity());
            match router.assemble(&pairs, from, into) {
                Ok(hops) => {
                    assert_eq!(Some(hops.len()), expected, "{} -> {}", from, into);
                    assert_eq!(hops[0].offered_token.identity(), from.identity());
                    assert!(
                        hops[1..].iter().all(|hop| !hop.offered_token.is_native()),
                        "native mid-route for {} -> {}",
                        from,
                        into
                    );
                }
                Err(err) => {
                    assert!(err.is_missing_route(), "{} -> {}: {}", from, into, err);
                    assert_eq!(expected, None, "{} -> {}", from, into);
                }
            }
        }
    }
}

#[test]
fn test_batch_matches_single_calls() {
    let pairs = five_pairs();
    let requests = vec![
        (token("SSCRT"), token("BTC")),
        (token("BTC"), token("SSCRT")),
        (token("ETH"), token("SIENNA")),
    ];

    let router = Router::default();
    let batch = router.assemble_batch(&pairs, &requests);

    for ((from, into), result) in requests.iter().zip(batch) {
        assert_eq!(result, router.assemble(&pairs, from, into));
    }
}
