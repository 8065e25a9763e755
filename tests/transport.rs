mod tests {
    use ledstrip_controller::transport::{
        MAX_MESSAGE_LEN, Reply, Transport, TransportEvent, TransportQueue, TryReceiveError,
    };

    #[test]
    fn test_events_flow_to_the_render_side() {
        let queue: TransportQueue<4, 4> = TransportQueue::new();
        assert!(queue.try_push_event(TransportEvent::connected(1, [192, 168, 0, 7], "/")).is_ok());
        assert!(queue.try_push_text(1, "#waves").is_ok());

        let mut transport = queue.transport();
        assert!(matches!(
            transport.poll(),
            Some(TransportEvent::Connected { id: 1, remote: [192, 168, 0, 7], .. })
        ));
        assert_eq!(transport.poll(), Some(TransportEvent::text(1, "#waves")));
        assert_eq!(transport.poll(), None);
    }

    #[test]
    fn test_full_event_queue_returns_the_event() {
        let queue: TransportQueue<1, 1> = TransportQueue::new();
        assert!(queue.try_push_text(0, "?").is_ok());
        let rejected = queue.try_push_text(0, "#off").expect_err("queue is full");
        assert_eq!(rejected.0, TransportEvent::text(0, "#off"));
    }

    #[test]
    fn test_replies_flow_back() {
        let queue: TransportQueue<1, 2> = TransportQueue::new();
        assert_eq!(queue.try_take_reply(), Err(TryReceiveError));

        let mut transport = queue.transport();
        transport.send(3, "selectMode done");
        transport.send(3, "setOption done");
        // Dropped, the reply queue holds two entries.
        transport.send(3, "Connected");

        let reply: Reply = queue.try_take_reply().expect("first reply");
        assert_eq!(reply.id, 3);
        assert_eq!(reply.text.as_str(), "selectMode done");
        assert_eq!(
            queue.try_take_reply().map(|reply| reply.text),
            Ok("setOption done".try_into().expect("fits"))
        );
        assert_eq!(queue.try_take_reply(), Err(TryReceiveError));
    }

    #[test]
    fn test_long_messages_are_truncated() {
        let long = "x".repeat(MAX_MESSAGE_LEN + 10);
        let TransportEvent::Text { message, .. } = TransportEvent::text(0, &long) else {
            panic!("text event expected");
        };
        assert_eq!(message.len(), MAX_MESSAGE_LEN);
    }
}
