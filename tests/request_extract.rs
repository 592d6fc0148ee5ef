use medloc::locator::extract::RequestTypeExtractor;

fn extract(source: &str) -> Option<String> {
    let mut extractor = RequestTypeExtractor::new().unwrap();
    extractor.request_type(source, "IRequest").unwrap()
}

#[test]
fn extracts_request_type_from_a_realistic_file() {
    let source = r#"
using System;
using MediatR;

namespace App.Orders
{
    public class CreateOrder : IRequest<OrderId>
    {
        public string Sku { get; init; }
        public int Quantity { get; init; }
    }

    public class CreateOrderValidator
    {
    }
}
"#;
    assert_eq!(extract(source).as_deref(), Some("CreateOrder"));
}

#[test]
fn two_qualifying_declarations_resolve_to_the_earlier_one() {
    let source = r#"
public class First : IRequest {}
public class Second : IRequest {}
"#;
    assert_eq!(extract(source).as_deref(), Some("First"));
}

#[test]
fn marker_buried_later_in_the_base_list_still_counts() {
    let source = "public class Ping : EntityBase, IRequest<Pong>, IDisposable {}";
    assert_eq!(extract(source).as_deref(), Some("Ping"));
}

#[test]
fn qualified_marker_is_out_of_scope() {
    assert_eq!(extract("public class Ping : MediatR.IRequest<Pong> {}"), None);
}

#[test]
fn file_scoped_namespace_records_qualify() {
    let source = r#"
namespace App.Orders;

public record CancelOrder(int OrderId) : IRequest;
"#;
    assert_eq!(extract(source).as_deref(), Some("CancelOrder"));
}
